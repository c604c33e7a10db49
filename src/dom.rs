use crate::constants::CONFIG_ATTR_PREFIX;
use crate::input;
use glam::DVec2;
use globe_core::{GlobeConfig, OVERRIDE_KEYS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS size and device pixel ratio of the canvas after a backing-store sync.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceMetrics {
    pub css: DVec2,
    pub dpr: f64,
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas' internal pixel size to CSS size * devicePixelRatio and
/// scale the 2D context so drawing happens in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> SurfaceMetrics {
    let Some(w) = web::window() else {
        return SurfaceMetrics {
            css: DVec2::new(canvas.width() as f64, canvas.height() as f64),
            dpr: 1.0,
        };
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let inner_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let inner_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let css = input::css_surface_size(rect.width(), rect.height(), inner_w, inner_h);
    let (w_px, h_px) = input::backing_size(css, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    // Setting width/height resets the context state, so reapply the transform.
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    SurfaceMetrics { css, dpr }
}

/// Defaults overridden by `data-*` attributes on the canvas. Rejected values
/// are logged and skipped; an inconsistent result falls back to defaults.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> GlobeConfig {
    let mut config = GlobeConfig::default();
    for &key in OVERRIDE_KEYS {
        let Some(value) = canvas.get_attribute(&format!("{CONFIG_ATTR_PREFIX}{key}")) else {
            continue;
        };
        if let Err(e) = config.apply_override(key, &value) {
            log::warn!("[config] ignoring override: {}", e);
        }
    }
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[config] invalid configuration ({}), using defaults", e);
            GlobeConfig::default()
        }
    }
}

/// Register `handler` for `event` on `target` and leak the closure for the page's lifetime.
///
/// Non-passive listeners are needed wherever the handler calls `prevent_default`
/// (wheel, touchstart, touchmove).
pub fn add_listener<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}
