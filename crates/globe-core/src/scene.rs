//! The single mutable scene: sphere placement, point batch, starfield and drag state.

use crate::config::GlobeConfig;
use crate::constants::MIN_SURFACE_RADIUS;
use crate::interaction::{below_focal, Interaction, RadiusBounds, RotationDelta};
use crate::point::Point;
use crate::projection::Projection;
use crate::sampler::sample_sphere;
use crate::stars::{scatter_stars, Star};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Scene {
    config: GlobeConfig,
    projection: Projection,
    size: DVec2,
    points: Vec<Point>,
    stars: Vec<Star>,
    ambient: RotationDelta,
    interaction: Interaction,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: GlobeConfig, width: f64, height: f64, seed: u64) -> Self {
        Self::with_rng(config, width, height, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: GlobeConfig, width: f64, height: f64, rng: StdRng) -> Self {
        let ambient = RotationDelta {
            d_theta: config.ambient_d_theta,
            d_phi: config.ambient_d_phi,
        };
        let interaction = Interaction::from_config(&config);
        let projection = Projection::new(MIN_SURFACE_RADIUS, DVec2::ZERO, config.focal_length);
        let mut scene = Self {
            config,
            projection,
            size: DVec2::ZERO,
            points: Vec::new(),
            stars: Vec::new(),
            ambient,
            interaction,
            rng,
        };
        scene.resize(width, height);
        scene
    }

    /// Re-derive the sphere from the surface size and regenerate every point and star.
    pub fn resize(&mut self, width: f64, height: f64) {
        let size = DVec2::new(sanitize_extent(width), sanitize_extent(height));
        let radius = below_focal(
            (self.config.radius_fraction * size.min_element()).max(MIN_SURFACE_RADIUS),
            self.config.focal_length,
        );
        self.size = size;
        self.projection = Projection::new(radius, size * 0.5, self.config.focal_length);
        self.points = sample_sphere(&mut self.rng, self.config.point_count, &self.projection);
        self.stars = if self.config.starfield {
            scatter_stars(
                &mut self.rng,
                self.config.star_count,
                size,
                self.config.star_radius,
                self.config.star_opacity,
            )
        } else {
            Vec::new()
        };
        self.interaction.release();
        log::info!(
            "[scene] reset {:.0}x{:.0} radius={:.1} points={} stars={}",
            size.x,
            size.y,
            radius,
            self.points.len(),
            self.stars.len()
        );
    }

    /// One frame of ambient spin.
    pub fn advance(&mut self) {
        let RotationDelta { d_theta, d_phi } = self.ambient;
        self.rotate_all(d_theta, d_phi);
    }

    pub fn rotate_all(&mut self, d_theta: f64, d_phi: f64) {
        let projection = self.projection;
        for p in &mut self.points {
            p.rotate(d_theta, d_phi, &projection);
        }
    }

    pub fn pointer_down(&mut self, pos: DVec2) {
        self.interaction.press(pos);
        log::debug!("[drag] begin at ({:.1},{:.1})", pos.x, pos.y);
    }

    /// Returns `true` when the move rotated the globe.
    pub fn pointer_move(&mut self, pos: DVec2) -> bool {
        match self.interaction.drag_to(pos) {
            Some(RotationDelta { d_theta, d_phi }) => {
                self.rotate_all(d_theta, d_phi);
                true
            }
            None => false,
        }
    }

    pub fn pointer_up(&mut self) {
        if self.interaction.is_dragging() {
            log::debug!("[drag] end");
        }
        self.interaction.release();
    }

    /// Apply a wheel step to the radius and reproject the existing points.
    pub fn wheel(&mut self, delta_y: f64) -> f64 {
        let bounds = self.radius_bounds();
        let radius = self
            .interaction
            .zoom(self.projection.radius, delta_y, bounds);
        self.set_radius(radius);
        radius
    }

    fn set_radius(&mut self, radius: f64) {
        if radius == self.projection.radius {
            return;
        }
        self.projection.radius = radius;
        let projection = self.projection;
        for p in &mut self.points {
            p.update_position(&projection);
        }
    }

    #[inline]
    pub fn radius_bounds(&self) -> RadiusBounds {
        RadiusBounds::for_surface(&self.config, self.size.x)
    }

    #[inline]
    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        self.size
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[inline]
    pub fn ambient(&self) -> RotationDelta {
        self.ambient
    }

    pub fn set_ambient(&mut self, ambient: RotationDelta) {
        self.ambient = ambient;
    }

    #[inline]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }
}

#[inline]
fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
