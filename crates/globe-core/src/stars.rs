use glam::DVec2;
use rand::Rng;

/// Static background decoration; never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub pos: DVec2,
    pub radius: f64,
    pub opacity: f64,
}

pub fn scatter_stars<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    size: DVec2,
    radius: (f64, f64),
    opacity: (f64, f64),
) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            pos: DVec2::new(rng.gen::<f64>() * size.x, rng.gen::<f64>() * size.y),
            radius: lerp(radius, rng.gen()),
            opacity: lerp(opacity, rng.gen()),
        })
        .collect()
}

#[inline]
fn lerp((lo, hi): (f64, f64), t: f64) -> f64 {
    lo + (hi - lo) * t
}
