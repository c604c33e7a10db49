use crate::point::Point;
use crate::projection::Projection;
use rand::Rng;
use std::f64::consts::TAU;

/// Draw one direction uniformly over the sphere's area.
///
/// `theta` goes through the inverse CDF `acos(1 - 2u)`; drawing it linearly
/// in `[0, π)` would crowd the poles.
#[inline]
pub fn sample_angles<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    let u: f64 = rng.gen();
    let theta = (1.0 - 2.0 * u).acos();
    let phi = rng.gen::<f64>() * TAU;
    (theta, phi)
}

/// `count` independent points, already projected.
pub fn sample_sphere<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    projection: &Projection,
) -> Vec<Point> {
    (0..count)
        .map(|_| {
            let (theta, phi) = sample_angles(rng);
            Point::new(theta, phi, projection)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    #[test]
    fn angles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let (theta, phi) = sample_angles(&mut rng);
            assert!((0.0..=PI).contains(&theta));
            assert!((0.0..TAU).contains(&phi));
        }
    }

    #[test]
    fn sampled_points_are_projected() {
        let mut rng = StdRng::seed_from_u64(11);
        let proj = Projection::new(100.0, DVec2::new(50.0, 50.0), 500.0);
        let pts = sample_sphere(&mut rng, 64, &proj);
        assert_eq!(pts.len(), 64);
        for p in &pts {
            assert!((p.pos3d.length() - 100.0).abs() < 1e-9);
            assert_eq!(p.pos2d, proj.project(p.pos3d));
        }
    }
}
