//! Adjustable globe parameters.
//!
//! Defaults come from [`crate::constants`]. Front-ends may override single
//! values by key (the web front-end reads them from `data-*` attributes on the
//! canvas) and must call [`GlobeConfig::validate`] before building a scene.

use crate::color::{Palette, Rgba};
use crate::constants::*;
use std::str::FromStr;
use thiserror::Error;

/// Keys accepted by [`GlobeConfig::apply_override`].
pub const OVERRIDE_KEYS: &[&str] = &[
    "point-count",
    "point-radius",
    "high-dpi-multiplier",
    "focal-length",
    "ambient-d-theta",
    "ambient-d-phi",
    "drag-sensitivity",
    "wheel-sensitivity",
    "min-radius",
    "max-radius-fraction",
    "radius-fraction",
    "star-count",
    "star-radius-min",
    "star-radius-max",
    "star-opacity-min",
    "star-opacity-max",
    "starfield",
    "palette",
    "point-color",
];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("`{0}` must be positive")]
    NonPositive(&'static str),
    #[error("`{0}` must be finite")]
    NotFinite(&'static str),
    #[error("`{0}` range is empty or inverted")]
    BadRange(&'static str),
    #[error("min_radius {min_radius} must stay below focal_length {focal_length}")]
    FocalTooShort { min_radius: f64, focal_length: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub point_count: usize,
    pub point_radius: f64,
    pub high_dpi_multiplier: f64,
    pub focal_length: f64,
    pub ambient_d_theta: f64,
    pub ambient_d_phi: f64,
    pub drag_sensitivity: f64,
    pub wheel_sensitivity: f64,
    pub min_radius: f64,
    pub max_radius_fraction: f64,
    pub radius_fraction: f64,
    pub star_count: usize,
    pub star_radius: (f64, f64),
    pub star_opacity: (f64, f64),
    pub starfield: bool,
    pub palette: Palette,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            point_count: POINT_COUNT,
            point_radius: POINT_RADIUS,
            high_dpi_multiplier: HIGH_DPI_MULTIPLIER,
            focal_length: FOCAL_LENGTH,
            ambient_d_theta: AMBIENT_D_THETA,
            ambient_d_phi: AMBIENT_D_PHI,
            drag_sensitivity: DRAG_SENSITIVITY,
            wheel_sensitivity: WHEEL_SENSITIVITY,
            min_radius: MIN_RADIUS,
            max_radius_fraction: MAX_RADIUS_FRACTION,
            radius_fraction: RADIUS_FRACTION,
            star_count: STAR_COUNT,
            star_radius: (STAR_RADIUS_MIN, STAR_RADIUS_MAX),
            star_opacity: (STAR_OPACITY_MIN, STAR_OPACITY_MAX),
            starfield: true,
            palette: Palette::RadialHue,
        }
    }
}

impl GlobeConfig {
    /// The plain variant: black dots, no starfield.
    pub fn plain() -> Self {
        Self {
            starfield: false,
            palette: Palette::Solid(Rgba::BLACK),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("point_radius", self.point_radius)?;
        positive("high_dpi_multiplier", self.high_dpi_multiplier)?;
        positive("focal_length", self.focal_length)?;
        positive("min_radius", self.min_radius)?;
        positive("max_radius_fraction", self.max_radius_fraction)?;
        positive("radius_fraction", self.radius_fraction)?;
        finite("ambient_d_theta", self.ambient_d_theta)?;
        finite("ambient_d_phi", self.ambient_d_phi)?;
        finite("drag_sensitivity", self.drag_sensitivity)?;
        finite("wheel_sensitivity", self.wheel_sensitivity)?;
        ordered("star_radius", self.star_radius)?;
        ordered("star_opacity", self.star_opacity)?;
        if self.star_radius.0 < 0.0 {
            return Err(ConfigError::BadRange("star_radius"));
        }
        if self.star_opacity.0 < 0.0 || self.star_opacity.1 > 1.0 {
            return Err(ConfigError::BadRange("star_opacity"));
        }
        if self.min_radius >= self.focal_length * FOCAL_MARGIN {
            return Err(ConfigError::FocalTooShort {
                min_radius: self.min_radius,
                focal_length: self.focal_length,
            });
        }
        Ok(())
    }

    /// Override one value by its kebab-case key.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "point-count" => self.point_count = parse(key, value)?,
            "point-radius" => self.point_radius = parse(key, value)?,
            "high-dpi-multiplier" => self.high_dpi_multiplier = parse(key, value)?,
            "focal-length" => self.focal_length = parse(key, value)?,
            "ambient-d-theta" => self.ambient_d_theta = parse(key, value)?,
            "ambient-d-phi" => self.ambient_d_phi = parse(key, value)?,
            "drag-sensitivity" => self.drag_sensitivity = parse(key, value)?,
            "wheel-sensitivity" => self.wheel_sensitivity = parse(key, value)?,
            "min-radius" => self.min_radius = parse(key, value)?,
            "max-radius-fraction" => self.max_radius_fraction = parse(key, value)?,
            "radius-fraction" => self.radius_fraction = parse(key, value)?,
            "star-count" => self.star_count = parse(key, value)?,
            "star-radius-min" => self.star_radius.0 = parse(key, value)?,
            "star-radius-max" => self.star_radius.1 = parse(key, value)?,
            "star-opacity-min" => self.star_opacity.0 = parse(key, value)?,
            "star-opacity-max" => self.star_opacity.1 = parse(key, value)?,
            "starfield" => self.starfield = parse(key, value)?,
            "palette" => {
                self.palette = match value {
                    "radial" => Palette::RadialHue,
                    "mono" | "solid" => Palette::Solid(Rgba::BLACK),
                    _ => return Err(invalid(key, value)),
                }
            }
            "point-color" => {
                let c = Rgba::from_hex(value).ok_or_else(|| invalid(key, value))?;
                self.palette = Palette::Solid(c);
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Disk radius for points given the display's device pixel ratio.
    #[inline]
    pub fn effective_point_radius(&self, device_pixel_ratio: f64) -> f64 {
        if device_pixel_ratio > 1.0 {
            self.point_radius * self.high_dpi_multiplier
        } else {
            self.point_radius
        }
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn positive(name: &'static str, v: f64) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive(name))
    }
}

fn finite(name: &'static str, v: f64) -> Result<(), ConfigError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite(name))
    }
}

fn ordered(name: &'static str, (lo, hi): (f64, f64)) -> Result<(), ConfigError> {
    if lo.is_finite() && hi.is_finite() && lo <= hi {
        Ok(())
    } else {
        Err(ConfigError::BadRange(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(GlobeConfig::default().validate(), Ok(()));
        assert_eq!(GlobeConfig::plain().validate(), Ok(()));
    }

    #[test]
    fn overrides_parse_known_keys() {
        let mut cfg = GlobeConfig::default();
        cfg.apply_override("point-count", "300").unwrap();
        cfg.apply_override("focal-length", " 800.5 ").unwrap();
        cfg.apply_override("starfield", "false").unwrap();
        cfg.apply_override("palette", "mono").unwrap();
        assert_eq!(cfg.point_count, 300);
        assert_eq!(cfg.focal_length, 800.5);
        assert!(!cfg.starfield);
        assert_eq!(cfg.palette, Palette::Solid(Rgba::BLACK));

        cfg.apply_override("point-color", "#ff8000").unwrap();
        assert_eq!(cfg.palette, Palette::Solid(Rgba::rgb(255, 128, 0)));
    }

    #[test]
    fn every_listed_key_is_accepted() {
        let sample = |key: &str| match key {
            "starfield" => "true",
            "palette" => "radial",
            "point-color" => "#123",
            "point-count" | "star-count" => "10",
            _ => "0.5",
        };
        for &key in OVERRIDE_KEYS {
            let mut cfg = GlobeConfig::default();
            assert_eq!(cfg.apply_override(key, sample(key)), Ok(()), "{key}");
        }
    }

    #[test]
    fn overrides_reject_bad_input() {
        let mut cfg = GlobeConfig::default();
        assert_eq!(
            cfg.apply_override("spin", "1"),
            Err(ConfigError::UnknownKey("spin".into()))
        );
        assert!(matches!(
            cfg.apply_override("point-count", "-4"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(cfg.apply_override("palette", "plaid").is_err());
        assert_eq!(cfg, GlobeConfig::default());
    }

    #[test]
    fn validate_catches_broken_invariants() {
        let cfg = GlobeConfig {
            focal_length: 40.0,
            ..GlobeConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::FocalTooShort { .. })
        ));

        let cfg = GlobeConfig {
            star_radius: (2.0, 1.0),
            ..GlobeConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::BadRange("star_radius")));

        let cfg = GlobeConfig {
            point_radius: 0.0,
            ..GlobeConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositive("point_radius")));
    }

    #[test]
    fn point_radius_doubles_on_high_dpi() {
        let cfg = GlobeConfig::default();
        assert_eq!(cfg.effective_point_radius(1.0), 1.5);
        assert_eq!(cfg.effective_point_radius(2.0), 3.0);
    }
}
