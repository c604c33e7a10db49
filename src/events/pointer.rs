use crate::dom;
use crate::input;
use glam::DVec2;
use globe_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

#[inline]
fn surface_pos(canvas: &web::HtmlCanvasElement, client_x: f64, client_y: f64) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_surface(client_x, client_y, rect.left(), rect.top())
}

// ---------------- Mouse / pen ----------------

pub fn wire_pointer_handlers(w: &InputWiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointer_release(w, "pointerup");
    wire_pointer_release(w, "pointerleave");
    wire_pointer_release(w, "pointercancel");
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.canvas, "pointerdown", true, move |ev: web::PointerEvent| {
        if input::is_touch_pointer(&ev.pointer_type()) {
            return;
        }
        let pos = surface_pos(&w2.canvas, ev.client_x() as f64, ev.client_y() as f64);
        w2.scene.borrow_mut().pointer_down(pos);
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.canvas, "pointermove", true, move |ev: web::PointerEvent| {
        if input::is_touch_pointer(&ev.pointer_type()) {
            return;
        }
        let rect = w2.canvas.get_bounding_client_rect();
        let pos = input::client_to_surface(
            ev.client_x() as f64,
            ev.client_y() as f64,
            rect.left(),
            rect.top(),
        );
        let mut scene = w2.scene.borrow_mut();
        // A move that lands off the canvas ends the drag like pointerleave.
        if input::is_outside_surface(pos, DVec2::new(rect.width(), rect.height())) {
            scene.pointer_up();
        } else {
            scene.pointer_move(pos);
        }
    });
}

fn wire_pointer_release(w: &InputWiring, event: &str) {
    let w2 = w.clone();
    dom::add_listener(&w.canvas, event, true, move |ev: web::PointerEvent| {
        if input::is_touch_pointer(&ev.pointer_type()) {
            return;
        }
        w2.scene.borrow_mut().pointer_up();
    });
}

// ---------------- Touch ----------------

fn first_touch_pos(canvas: &web::HtmlCanvasElement, ev: &web::TouchEvent) -> Option<DVec2> {
    let touch = ev.touches().get(0)?;
    Some(surface_pos(
        canvas,
        touch.client_x() as f64,
        touch.client_y() as f64,
    ))
}

pub fn wire_touch_handlers(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.canvas, "touchstart", false, move |ev: web::TouchEvent| {
        if let Some(pos) = first_touch_pos(&w2.canvas, &ev) {
            w2.scene.borrow_mut().pointer_down(pos);
        }
        ev.prevent_default();
    });

    let w2 = w.clone();
    dom::add_listener(&w.canvas, "touchmove", false, move |ev: web::TouchEvent| {
        if let Some(pos) = first_touch_pos(&w2.canvas, &ev) {
            w2.scene.borrow_mut().pointer_move(pos);
        }
        ev.prevent_default();
    });

    for event in ["touchend", "touchcancel"] {
        let w2 = w.clone();
        dom::add_listener(&w.canvas, event, true, move |_ev: web::TouchEvent| {
            w2.scene.borrow_mut().pointer_up();
        });
    }
}
