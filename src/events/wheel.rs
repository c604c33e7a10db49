use super::pointer::InputWiring;
use crate::dom;
use crate::input;
use web_sys as web;

/// Wheel zoom on the canvas; page scrolling is suppressed while over it.
pub fn wire_wheel_zoom(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.canvas, "wheel", false, move |ev: web::WheelEvent| {
        ev.prevent_default();
        let mut scene = w2.scene.borrow_mut();
        let page_height = scene.size().y;
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), page_height);
        let radius = scene.wheel(delta);
        log::debug!("[wheel] delta={:.1} radius={:.1}", delta, radius);
    });
}
