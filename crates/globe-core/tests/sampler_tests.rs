// Statistical checks on the sphere sampler.

use globe_core::{sample_angles, sample_sphere, Projection};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const BINS: usize = 10;

fn histogram(values: impl Iterator<Item = f64>, lo: f64, hi: f64) -> [usize; BINS] {
    let mut bins = [0usize; BINS];
    for v in values {
        let t = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
        let i = ((t * BINS as f64) as usize).min(BINS - 1);
        bins[i] += 1;
    }
    bins
}

fn chi_squared(bins: &[usize; BINS], total: usize) -> f64 {
    let expected = total as f64 / BINS as f64;
    bins.iter()
        .map(|&n| {
            let d = n as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn cos_theta_is_uniform_over_many_trials() {
    let mut rng = StdRng::seed_from_u64(2024);
    let proj = Projection::new(1.0, DVec2::ZERO, 500.0);
    let mut cos_values = Vec::new();
    for _ in 0..40 {
        let pts = sample_sphere(&mut rng, 1500, &proj);
        cos_values.extend(pts.iter().map(|p| p.theta.cos()));
    }
    let total = cos_values.len();
    let bins = histogram(cos_values.into_iter(), -1.0, 1.0);
    // 9 degrees of freedom; 99.9th percentile is ~27.9
    let chi2 = chi_squared(&bins, total);
    assert!(chi2 < 27.9, "cos(theta) not uniform: chi2={chi2:.2} bins={bins:?}");
}

#[test]
fn theta_itself_is_not_uniform() {
    let mut rng = StdRng::seed_from_u64(99);
    let thetas: Vec<f64> = (0..60_000).map(|_| sample_angles(&mut rng).0).collect();
    let bins = histogram(thetas.into_iter(), 0.0, std::f64::consts::PI);
    // equal-area sampling thins out the polar bins
    assert!(bins[0] * 3 < bins[BINS / 2]);
    assert!(bins[BINS - 1] * 3 < bins[BINS / 2]);
}

#[test]
fn phi_is_uniform() {
    let mut rng = StdRng::seed_from_u64(7);
    let total = 60_000;
    let phis = (0..total).map(|_| sample_angles(&mut rng).1);
    let bins = histogram(phis, 0.0, std::f64::consts::TAU);
    let chi2 = chi_squared(&bins, total);
    assert!(chi2 < 27.9, "phi not uniform: chi2={chi2:.2} bins={bins:?}");
}

#[test]
fn hemispheres_are_balanced() {
    let mut rng = StdRng::seed_from_u64(31);
    let proj = Projection::new(210.0, DVec2::new(400.0, 300.0), 500.0);
    let pts = sample_sphere(&mut rng, 20_000, &proj);
    let near = pts.iter().filter(|p| p.pos3d.z < 0.0).count();
    let share = near as f64 / pts.len() as f64;
    assert!((share - 0.5).abs() < 0.02, "near share {share}");
}
