use glam::DVec2;
use globe_core::{Color, Surface};
use std::f64::consts::TAU;
use web_sys as web;

/// `Surface` over a 2D canvas context whose transform is already scaled to CSS pixels.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    last_fill: String,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            last_fill: String::new(),
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: DVec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x, size.y);
        // fillStyle may have been reset by a backing-store resize
        self.last_fill.clear();
    }

    fn fill_disk(&mut self, center: DVec2, radius: f64, color: &Color) {
        let css = color.to_css();
        if css != self.last_fill {
            self.ctx.set_fill_style_str(&css);
            self.last_fill = css;
        }
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}
