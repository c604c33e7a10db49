//! Pointer/touch drag and wheel zoom mapped onto sphere rotation and radius.

use crate::config::GlobeConfig;
use crate::constants::FOCAL_MARGIN;
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor: DVec2,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationDelta {
    pub d_theta: f64,
    pub d_phi: f64,
}

/// Allowed sphere radius range for a given surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusBounds {
    pub min: f64,
    pub max: f64,
}

impl RadiusBounds {
    /// `[min_radius, max_radius_fraction * width]`, kept below the focal
    /// length and never inverted on narrow surfaces.
    pub fn for_surface(config: &GlobeConfig, width: f64) -> Self {
        let min = below_focal(config.min_radius, config.focal_length);
        let max = below_focal(config.max_radius_fraction * width, config.focal_length).max(min);
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, radius: f64) -> f64 {
        radius.clamp(self.min, self.max)
    }
}

/// `radius` unchanged while it is below `focal_length`; otherwise pulled back
/// to `FOCAL_MARGIN * focal_length` so `focal_length + z` stays positive.
#[inline]
pub fn below_focal(radius: f64, focal_length: f64) -> f64 {
    if radius >= focal_length {
        focal_length * FOCAL_MARGIN
    } else {
        radius
    }
}

#[derive(Clone, Debug)]
pub struct Interaction {
    state: DragState,
    drag_sensitivity: f64,
    wheel_sensitivity: f64,
}

impl Interaction {
    pub fn new(drag_sensitivity: f64, wheel_sensitivity: f64) -> Self {
        Self {
            state: DragState::Idle,
            drag_sensitivity,
            wheel_sensitivity,
        }
    }

    pub fn from_config(config: &GlobeConfig) -> Self {
        Self::new(config.drag_sensitivity, config.wheel_sensitivity)
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer-down / touch-start: anchor the drag at `pos`.
    pub fn press(&mut self, pos: DVec2) {
        self.state = DragState::Dragging { anchor: pos };
    }

    /// Move while dragging. Returns the frame-to-frame rotation and re-anchors;
    /// `None` when idle.
    pub fn drag_to(&mut self, pos: DVec2) -> Option<RotationDelta> {
        let DragState::Dragging { anchor } = self.state else {
            return None;
        };
        let delta = pos - anchor;
        self.state = DragState::Dragging { anchor: pos };
        Some(RotationDelta {
            d_theta: delta.y * self.drag_sensitivity,
            d_phi: delta.x * self.drag_sensitivity,
        })
    }

    /// Pointer-up, pointer-leave, touch-end.
    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }

    /// New radius after a wheel step; positive `wheel_delta_y` (scrolling down) shrinks the globe.
    pub fn zoom(&self, radius: f64, wheel_delta_y: f64, bounds: RadiusBounds) -> f64 {
        bounds.clamp(radius - wheel_delta_y * self.wheel_sensitivity)
    }
}
