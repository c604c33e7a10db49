use crate::color::{Color, Palette, Rgba};
use crate::config::GlobeConfig;
use crate::scene::Scene;
use glam::DVec2;

/// Minimal 2D drawing target.
pub trait Surface {
    fn clear(&mut self, size: DVec2);
    fn fill_disk(&mut self, center: DVec2, radius: f64, color: &Color);
}

/// Draws a scene: optional starfield layer, then every point in iteration order.
///
/// No depth sorting or back-face culling; far-side points are drawn like any other.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobeRenderer {
    pub palette: Palette,
    pub starfield: bool,
    pub point_radius: f64,
}

impl GlobeRenderer {
    pub fn new(palette: Palette, starfield: bool, point_radius: f64) -> Self {
        Self {
            palette,
            starfield,
            point_radius,
        }
    }

    pub fn from_config(config: &GlobeConfig, device_pixel_ratio: f64) -> Self {
        Self::new(
            config.palette,
            config.starfield,
            config.effective_point_radius(device_pixel_ratio),
        )
    }

    pub fn render<S: Surface + ?Sized>(&self, scene: &Scene, surface: &mut S) {
        surface.clear(scene.size());
        if self.starfield {
            for star in scene.stars() {
                let color = Color::Rgba(Rgba::WHITE.with_alpha(star.opacity));
                surface.fill_disk(star.pos, star.radius, &color);
            }
        }
        let radius = scene.projection().radius;
        for p in scene.points() {
            let color = self.palette.color_for(p, radius);
            surface.fill_disk(p.pos2d, self.point_radius, &color);
        }
    }
}
