/// DOM and event tuning constants for the web front-end.
///
/// Globe tuning (point count, focal length, sensitivities) lives in
/// `globe_core::constants`; these only concern the browser surface.
// Canvas element the globe draws into
pub const CANVAS_ID: &str = "scene";

// Prefix for per-canvas configuration overrides, e.g. `data-point-count="800"`
pub const CONFIG_ATTR_PREFIX: &str = "data-";

// WheelEvent.deltaMode normalization
pub const WHEEL_LINE_HEIGHT_PX: f64 = 16.0;
pub const WHEEL_DELTA_PIXEL: u32 = 0;
pub const WHEEL_DELTA_LINE: u32 = 1;
pub const WHEEL_DELTA_PAGE: u32 = 2;

// Pointer events with this type are left to the touch handlers
pub const TOUCH_POINTER_TYPE: &str = "touch";
