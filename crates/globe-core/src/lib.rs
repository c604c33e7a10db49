pub mod color;
pub mod config;
pub mod constants;
pub mod frame;
pub mod interaction;
pub mod point;
pub mod projection;
pub mod render;
pub mod sampler;
pub mod scene;
pub mod stars;

pub use color::*;
pub use config::*;
pub use frame::*;
pub use interaction::*;
pub use point::*;
pub use projection::*;
pub use render::*;
pub use sampler::*;
pub use scene::*;
pub use stars::*;
