pub mod pointer;
pub mod wheel;

pub use pointer::{wire_pointer_handlers, wire_touch_handlers};
pub use wheel::wire_wheel_zoom;
