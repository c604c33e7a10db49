//! Explicit frame loop with an injectable clock.
//!
//! The host only decides *when* a frame happens (e.g. `requestAnimationFrame`);
//! each call to [`FrameLoop::step`] advances the scene once and renders it.

use crate::constants::{FPS_SMOOTHING_ALPHA, FRAME_STATS_LOG_EVERY};
use crate::render::{GlobeRenderer, Surface};
use crate::scene::Scene;
use instant::Instant;
use std::cell::Cell;
use std::time::Duration;

pub trait Clock {
    /// Monotonic time since an arbitrary origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by `instant::Instant` (works on wasm and native).
pub struct InstantClock {
    origin: Instant,
}

impl Default for InstantClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for InstantClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get() + dt);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub frames: u64,
    pub last_dt: Duration,
    pub fps: f64,
}

impl FrameStats {
    fn record(&mut self, dt: Duration) {
        self.frames += 1;
        self.last_dt = dt;
        let dt_sec = dt.as_secs_f64();
        if dt_sec <= 0.0 {
            return;
        }
        let sample = 1.0 / dt_sec;
        self.fps = if self.fps == 0.0 {
            sample
        } else {
            (1.0 - FPS_SMOOTHING_ALPHA) * self.fps + FPS_SMOOTHING_ALPHA * sample
        };
    }
}

pub struct FrameLoop<C: Clock> {
    clock: C,
    last: Option<Duration>,
    stats: FrameStats,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last: None,
            stats: FrameStats::default(),
        }
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Clear, draw the background, spin every point by the ambient delta and draw it.
    pub fn step<S: Surface + ?Sized>(
        &mut self,
        scene: &mut Scene,
        renderer: &GlobeRenderer,
        surface: &mut S,
    ) {
        let now = self.clock.now();
        let dt = self.last.map(|t| now.saturating_sub(t)).unwrap_or_default();
        self.last = Some(now);
        self.stats.record(dt);

        scene.advance();
        renderer.render(scene, surface);

        if self.stats.frames % FRAME_STATS_LOG_EVERY == 0 {
            log::debug!(
                "[frame] n={} dt={:.2}ms fps~{:.1}",
                self.stats.frames,
                dt.as_secs_f64() * 1000.0,
                self.stats.fps
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobeConfig;
    use crate::render::tests::Recording;

    #[test]
    fn manual_clock_drives_deterministic_frames() {
        let cfg = GlobeConfig {
            point_count: 10,
            star_count: 0,
            ..GlobeConfig::default()
        };
        let mut scene = Scene::new(cfg.clone(), 200.0, 200.0, 5);
        let renderer = GlobeRenderer::from_config(&cfg, 1.0);
        let mut surface = Recording::default();
        let mut frames = FrameLoop::new(ManualClock::default());

        let theta0 = scene.points()[0].theta;
        for _ in 0..4 {
            frames.clock().advance(Duration::from_millis(20));
            frames.step(&mut scene, &renderer, &mut surface);
        }

        let stats = frames.stats();
        assert_eq!(stats.frames, 4);
        assert_eq!(stats.last_dt, Duration::from_millis(20));
        assert!((stats.fps - 50.0).abs() < 1e-6);
        assert_eq!(surface.clears, 4);
        assert_eq!(surface.disks.len(), 10);

        let mut expected = theta0;
        for _ in 0..4 {
            expected += cfg.ambient_d_theta;
        }
        assert_eq!(scene.points()[0].theta, expected);
    }

    #[test]
    fn first_frame_has_zero_dt() {
        let mut stats = FrameStats::default();
        stats.record(Duration::ZERO);
        assert_eq!(stats.frames, 1);
        assert_eq!(stats.fps, 0.0);
    }
}
