use crate::constants::{
    TOUCH_POINTER_TYPE, WHEEL_DELTA_LINE, WHEEL_DELTA_PAGE, WHEEL_LINE_HEIGHT_PX,
};
use glam::DVec2;

// ---------------- Surface sizing ----------------

/// CSS size of the drawing surface: the canvas' laid-out box, or the window's
/// inner size when the canvas has not been laid out yet.
#[inline]
pub fn css_surface_size(rect_w: f64, rect_h: f64, inner_w: f64, inner_h: f64) -> DVec2 {
    if rect_w > 0.0 && rect_h > 0.0 {
        DVec2::new(rect_w, rect_h)
    } else {
        DVec2::new(inner_w.max(0.0), inner_h.max(0.0))
    }
}

/// Backing-store pixel size for a CSS size at the given device pixel ratio (never zero).
#[inline]
pub fn backing_size(css: DVec2, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css.x * dpr) as u32;
    let h = (css.y * dpr) as u32;
    (w.max(1), h.max(1))
}

// ---------------- Pointer helpers ----------------

/// Client (viewport) coordinates to surface CSS pixels.
#[inline]
pub fn client_to_surface(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> DVec2 {
    DVec2::new(client_x - rect_left, client_y - rect_top)
}

/// `true` when a surface position falls outside `[0, size.x] x [0, size.y]`.
#[inline]
pub fn is_outside_surface(pos: DVec2, size: DVec2) -> bool {
    !(pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= size.x && pos.y <= size.y)
}

#[inline]
pub fn is_touch_pointer(pointer_type: &str) -> bool {
    pointer_type == TOUCH_POINTER_TYPE
}

// ---------------- Wheel helpers ----------------

/// Normalize a wheel delta to pixels according to `WheelEvent.deltaMode`.
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        WHEEL_DELTA_LINE => delta * WHEEL_LINE_HEIGHT_PX,
        WHEEL_DELTA_PAGE => delta * page_height,
        _ => delta,
    }
}
