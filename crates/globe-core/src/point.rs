use crate::projection::Projection;
use glam::{DVec2, DVec3};
use std::f64::consts::TAU;

// Angles are folded back into [0, 2π) only once they drift this far, so
// ordinary per-frame additions stay exact.
const ANGLE_WRAP_LIMIT: f64 = 1.0e6;

/// One sample on the sphere surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub theta: f64,
    pub phi: f64,
    pub pos3d: DVec3,
    pub pos2d: DVec2,
}

impl Point {
    pub fn new(theta: f64, phi: f64, projection: &Projection) -> Self {
        let mut p = Self {
            theta,
            phi,
            pos3d: DVec3::ZERO,
            pos2d: DVec2::ZERO,
        };
        p.update_position(projection);
        p
    }

    /// Recompute the derived 3D and screen positions from the angles.
    pub fn update_position(&mut self, projection: &Projection) {
        self.pos3d = projection.to_cartesian(self.theta, self.phi);
        self.pos2d = projection.project(self.pos3d);
    }

    pub fn rotate(&mut self, d_theta: f64, d_phi: f64, projection: &Projection) {
        self.phi = wrap(self.phi + d_phi);
        self.theta = wrap(self.theta + d_theta);
        self.update_position(projection);
    }

    /// Distance from the view axis, `sqrt(x² + y²)` of the 3D position.
    #[inline]
    pub fn radial_distance(&self) -> f64 {
        self.pos3d.truncate().length()
    }
}

#[inline]
fn wrap(angle: f64) -> f64 {
    if angle.abs() > ANGLE_WRAP_LIMIT {
        angle.rem_euclid(TAU)
    } else {
        angle
    }
}
