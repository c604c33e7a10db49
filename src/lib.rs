#![cfg(target_arch = "wasm32")]
use globe_core::{FrameLoop, GlobeRenderer, InstantClock, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;

use constants::CANVAS_ID;

// Resizing resets the scene: new radius/center, fresh points and stars.
fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    scene: &Rc<RefCell<Scene>>,
    renderer: &Rc<RefCell<GlobeRenderer>>,
) {
    let canvas_resize = canvas.clone();
    let ctx_resize = ctx.clone();
    let scene_resize = scene.clone();
    let renderer_resize = renderer.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let metrics = dom::sync_canvas_backing_size(&canvas_resize, &ctx_resize);
        let mut scene = scene_resize.borrow_mut();
        scene.resize(metrics.css.x, metrics.css.y);
        *renderer_resize.borrow_mut() = GlobeRenderer::from_config(scene.config(), metrics.dpr);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = dom::read_config(&canvas);
    let metrics = dom::sync_canvas_backing_size(&canvas, &ctx);
    log::info!(
        "[canvas] {:.0}x{:.0} css @{}x",
        metrics.css.x,
        metrics.css.y,
        metrics.dpr
    );

    let renderer = Rc::new(RefCell::new(GlobeRenderer::from_config(&config, metrics.dpr)));
    let scene = Rc::new(RefCell::new(Scene::with_rng(
        config,
        metrics.css.x,
        metrics.css.y,
        StdRng::from_entropy(),
    )));

    wire_canvas_resize(&canvas, &ctx, &scene, &renderer);

    let wiring = events::pointer::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    };
    events::wire_pointer_handlers(&wiring);
    events::wire_touch_handlers(&wiring);
    events::wire_wheel_zoom(&wiring);

    // Redraw loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        renderer,
        surface: canvas::CanvasSurface::new(ctx),
        frames: FrameLoop::new(InstantClock::default()),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
