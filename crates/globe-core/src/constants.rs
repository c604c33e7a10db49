// Reference tuning values for the globe. `GlobeConfig::default()` is built from these.

// Sphere
pub const POINT_COUNT: usize = 1500;
pub const RADIUS_FRACTION: f64 = 0.35; // sphere radius as a share of min(width, height)
pub const MIN_SURFACE_RADIUS: f64 = 1.0; // floor applied on resize for degenerate surfaces

// Projection
pub const FOCAL_LENGTH: f64 = 500.0;
pub const FOCAL_MARGIN: f64 = 0.95; // radius never exceeds this share of the focal length

// Point disks
pub const POINT_RADIUS: f64 = 1.5;
pub const HIGH_DPI_MULTIPLIER: f64 = 2.0;

// Ambient spin, radians per frame
pub const AMBIENT_D_THETA: f64 = 0.0015;
pub const AMBIENT_D_PHI: f64 = 0.002;

// Interaction
pub const DRAG_SENSITIVITY: f64 = 0.005; // radians per pixel of drag
pub const WHEEL_SENSITIVITY: f64 = 0.02; // radius pixels per wheel pixel
pub const MIN_RADIUS: f64 = 50.0;
pub const MAX_RADIUS_FRACTION: f64 = 0.5; // of surface width

// Coloring
pub const HUE_SPAN_DEG: f64 = 270.0; // red at the center, violet at the rim
pub const POINT_SATURATION: f64 = 100.0;
pub const POINT_LIGHTNESS: f64 = 50.0;

// Starfield
pub const STAR_COUNT: usize = 200;
pub const STAR_RADIUS_MIN: f64 = 0.2;
pub const STAR_RADIUS_MAX: f64 = 1.2;
pub const STAR_OPACITY_MIN: f64 = 0.2;
pub const STAR_OPACITY_MAX: f64 = 1.0;

// Frame loop
pub const FRAME_STATS_LOG_EVERY: u64 = 300;
pub const FPS_SMOOTHING_ALPHA: f64 = 0.1; // new = (1-α)*old + α*sample
