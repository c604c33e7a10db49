use crate::constants::{HUE_SPAN_DEG, POINT_LIGHTNESS, POINT_SATURATION};
use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            3 => Some(Self::rgb(
                nibble(0)? * 17,
                nibble(1)? * 17,
                nibble(2)? * 17,
            )),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }
}

/// A fill color ready to hand to a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Hsl { h: f64, s: f64, l: f64 },
    Rgba(Rgba),
}

impl Color {
    /// CSS color string accepted by `fillStyle`.
    pub fn to_css(&self) -> String {
        match *self {
            Color::Hsl { h, s, l } => format!("hsl({:.1}, {}%, {}%)", h, s, l),
            Color::Rgba(c) if c.a >= 1.0 => format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
            Color::Rgba(c) => format!("rgba({}, {}, {}, {:.3})", c.r, c.g, c.b, c.a),
        }
    }
}

/// Point coloring strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Palette {
    /// Hue follows the distance from the sphere axis, red at the center to violet at the rim.
    RadialHue,
    Solid(Rgba),
}

impl Palette {
    pub fn color_for(&self, point: &Point, sphere_radius: f64) -> Color {
        match *self {
            Palette::RadialHue => Color::Hsl {
                h: radial_hue(point.radial_distance(), sphere_radius),
                s: POINT_SATURATION,
                l: POINT_LIGHTNESS,
            },
            Palette::Solid(c) => Color::Rgba(c),
        }
    }
}

/// Map a radial distance to a hue in degrees; silhouette overshoot is clamped.
#[inline]
pub fn radial_hue(radial_distance: f64, sphere_radius: f64) -> f64 {
    if sphere_radius <= 0.0 {
        return 0.0;
    }
    (radial_distance / sphere_radius).clamp(0.0, 1.0) * HUE_SPAN_DEG
}
