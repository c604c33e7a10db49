use glam::{DVec2, DVec3};

/// Sphere placement on the surface plus the perspective camera.
///
/// `focal_length` must stay above `radius` so that `focal_length + z` is
/// positive for every point on the sphere; [`crate::Scene`] caps the radius
/// to keep it that way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub radius: f64,
    pub center: DVec2,
    pub focal_length: f64,
}

impl Projection {
    pub fn new(radius: f64, center: DVec2, focal_length: f64) -> Self {
        Self {
            radius,
            center,
            focal_length,
        }
    }

    /// Spherical to Cartesian, with the pole along +Z (toward the far side).
    #[inline]
    pub fn to_cartesian(&self, theta: f64, phi: f64) -> DVec3 {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        DVec3::new(
            self.radius * sin_theta * cos_phi,
            self.radius * sin_theta * sin_phi,
            self.radius * cos_theta,
        )
    }

    /// Perspective projection onto the surface: nearer points spread out, farther ones shrink.
    #[inline]
    pub fn project(&self, p: DVec3) -> DVec2 {
        let scale = self.scale_at(p.z);
        self.center + DVec2::new(p.x, p.y) * scale
    }

    #[inline]
    pub fn scale_at(&self, z: f64) -> f64 {
        self.focal_length / (self.focal_length + z)
    }
}
