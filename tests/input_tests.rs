// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::DVec2;
use input::*;

#[test]
fn css_size_prefers_canvas_rect() {
    assert_eq!(
        css_surface_size(640.0, 480.0, 1920.0, 1080.0),
        DVec2::new(640.0, 480.0)
    );
}

#[test]
fn css_size_falls_back_to_window() {
    // Canvas not laid out yet
    assert_eq!(
        css_surface_size(0.0, 480.0, 1920.0, 1080.0),
        DVec2::new(1920.0, 1080.0)
    );
    assert_eq!(
        css_surface_size(0.0, 0.0, -5.0, 100.0),
        DVec2::new(0.0, 100.0)
    );
}

#[test]
fn backing_size_scales_by_dpr() {
    assert_eq!(backing_size(DVec2::new(800.0, 600.0), 1.0), (800, 600));
    assert_eq!(backing_size(DVec2::new(800.0, 600.0), 2.0), (1600, 1200));
    assert_eq!(backing_size(DVec2::new(333.0, 100.0), 1.5), (499, 150));
}

#[test]
fn backing_size_is_never_zero() {
    assert_eq!(backing_size(DVec2::ZERO, 2.0), (1, 1));
    assert_eq!(backing_size(DVec2::new(800.0, 600.0), 0.0), (800, 600));
    assert_eq!(backing_size(DVec2::new(800.0, 600.0), f64::NAN), (800, 600));
}

#[test]
fn client_coords_are_relative_to_canvas() {
    let p = client_to_surface(110.0, 115.0, 10.0, 15.0);
    assert_eq!(p, DVec2::new(100.0, 100.0));
    let p = client_to_surface(5.0, 5.0, 10.0, 15.0);
    assert_eq!(p, DVec2::new(-5.0, -10.0));
}

#[test]
fn moves_past_the_canvas_edge_are_outside() {
    let size = DVec2::new(800.0, 600.0);
    assert!(!is_outside_surface(DVec2::new(400.0, 300.0), size));
    assert!(!is_outside_surface(DVec2::ZERO, size));
    assert!(!is_outside_surface(size, size));
    // dragged off the left and bottom edges
    let p = client_to_surface(5.0, 5.0, 10.0, 15.0);
    assert!(is_outside_surface(p, size));
    assert!(is_outside_surface(DVec2::new(400.0, 600.5), size));
    assert!(is_outside_surface(DVec2::new(801.0, 10.0), size));
    assert!(is_outside_surface(DVec2::new(f64::NAN, 10.0), size));
}

#[test]
fn touch_pointers_are_detected() {
    assert!(is_touch_pointer("touch"));
    assert!(!is_touch_pointer("mouse"));
    assert!(!is_touch_pointer("pen"));
}

#[test]
fn wheel_delta_modes_normalize_to_pixels() {
    assert_eq!(wheel_delta_px(53.0, constants::WHEEL_DELTA_PIXEL, 600.0), 53.0);
    assert_eq!(wheel_delta_px(3.0, constants::WHEEL_DELTA_LINE, 600.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, constants::WHEEL_DELTA_PAGE, 600.0), -600.0);
    // Unknown modes pass through
    assert_eq!(wheel_delta_px(7.0, 42, 600.0), 7.0);
}
