//! Scroll-driven background scene.
//!
//! [`SceneDriver::tick`] is called once per animation frame with the
//! current timestamp and scroll fraction and returns a [`FrameState`] with
//! every derived visual parameter. Each primitive's update is a function of
//! elapsed time, scroll fraction and, where it must persist, its own prior
//! state. The renderer only reads the result.

pub mod camera;
pub mod geometry;
pub mod halo;
pub mod shaders;

use std::f32::consts::TAU;

use thiserror::Error;

use crate::config::SceneConfig;

pub use camera::CameraPose;
pub use halo::ParticleHalo;

/// Per-frame rates in this module are expressed per 60 Hz frame.
pub const REFERENCE_HZ: f32 = 60.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("graphics context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("failed to compile {stage} shader: {log}")]
    Compile { stage: &'static str, log: String },
    #[error("failed to link shader program: {0}")]
    Link(String),
    #[error("failed to allocate {0}")]
    Allocation(&'static str),
}

/// Scroll fraction as the scene consumes it: non-finite input becomes 0,
/// anything else passes through so overscroll extrapolates linearly.
pub fn scroll_input(raw: f32) -> f32 {
    if raw.is_finite() {
        raw
    } else {
        0.0
    }
}

/// Pulsing scale of the event horizon sphere.
pub fn horizon_scale(elapsed: f32, scroll: f32) -> f32 {
    1.0 + (elapsed * 2.0).sin() * 0.05 + scroll * 0.2
}

/// Accretion disk spin, radians per reference frame.
pub fn disk_spin_rate(scroll: f32) -> f32 {
    0.005 + scroll * 0.01
}

/// Photon ring spin, radians per reference frame.
pub fn photon_spin_rate(scroll: f32) -> f32 {
    0.02 + scroll * 0.03
}

/// Brightness factor applied to the disk colour.
pub fn disk_intensity(scroll: f32) -> f32 {
    0.7 + scroll * 0.3
}

/// Opacity factor of the lensing rings.
pub fn lens_intensity(scroll: f32) -> f32 {
    scroll
}

/// Rotation angle that accumulates frame over frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spin {
    pub angle: f32,
}

impl Spin {
    /// Advance by `rate` radians per reference frame over `frames` frames.
    /// The angle is kept in `[0, TAU)`.
    pub fn advance(self, rate: f32, frames: f32) -> Spin {
        Spin {
            angle: (self.angle + rate * frames).rem_euclid(TAU),
        }
    }
}

/// Converts animation-frame timestamps into elapsed seconds and a frame
/// step, clamped so a backgrounded tab does not resume with a huge jump.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last_ms: Option<f64>,
    max_delta: f32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            start_ms: None,
            last_ms: None,
            max_delta,
        }
    }

    /// Returns `(elapsed_seconds, delta_seconds)`.
    pub fn tick(&mut self, now_ms: f64) -> (f32, f32) {
        let start = *self.start_ms.get_or_insert(now_ms);
        let delta = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        let elapsed = ((now_ms - start) / 1000.0) as f32;
        (elapsed.max(0.0), delta.clamp(0.0, self.max_delta))
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    pub elapsed: f32,
    pub scroll: f32,
    pub camera: CameraPose,
    pub horizon_scale: f32,
    pub disk_angle: f32,
    pub photon_angle: f32,
    pub disk_intensity: f32,
    pub lens_intensity: f32,
}

pub struct SceneDriver<R> {
    config: SceneConfig,
    clock: FrameClock,
    disk: Spin,
    photons: Spin,
    halo: ParticleHalo,
    photon_positions: Vec<f32>,
    random: R,
}

impl<R: FnMut() -> f32> SceneDriver<R> {
    /// `random` must yield values in `[0, 1)`.
    pub fn new(config: SceneConfig, mut random: R) -> Self {
        let halo = ParticleHalo::new(&config, &mut random);
        let photon_positions =
            geometry::photon_ring(config.photon_count, config.photon_radius, &mut random);
        Self {
            clock: FrameClock::new(config.max_frame_delta),
            disk: Spin::default(),
            photons: Spin::default(),
            halo,
            photon_positions,
            random,
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn halo(&self) -> &ParticleHalo {
        &self.halo
    }

    /// Flat `xyz` positions of the photon ring in its local frame.
    pub fn photon_positions(&self) -> &[f32] {
        &self.photon_positions
    }

    pub fn tick(&mut self, now_ms: f64, scroll: f32) -> FrameState {
        let scroll = scroll_input(scroll);
        let (elapsed, delta) = self.clock.tick(now_ms);
        let frames = delta * REFERENCE_HZ;

        self.disk = self.disk.advance(disk_spin_rate(scroll), frames);
        self.photons = self.photons.advance(photon_spin_rate(scroll), frames);
        self.halo.step(scroll, frames, &self.config, &mut self.random);

        FrameState {
            elapsed,
            scroll,
            camera: CameraPose::at(elapsed, scroll, &self.config),
            horizon_scale: horizon_scale(elapsed, scroll),
            disk_angle: self.disk.angle,
            photon_angle: self.photons.angle,
            disk_intensity: disk_intensity(scroll),
            lens_intensity: lens_intensity(scroll),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for `Math.random`.
    pub(crate) fn lcg(seed: u32) -> impl FnMut() -> f32 {
        let mut state = seed;
        move || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 8) as f32 / (1u32 << 24) as f32
        }
    }

    #[test]
    fn horizon_scale_grows_with_scroll() {
        assert!((horizon_scale(0.0, 0.0) - 1.0).abs() < 1e-6);
        assert!((horizon_scale(0.0, 1.0) - 1.2).abs() < 1e-6);
        let peak = horizon_scale(std::f32::consts::FRAC_PI_4, 0.0);
        assert!((peak - 1.05).abs() < 1e-6);
    }

    #[test]
    fn spin_rates_increase_with_scroll() {
        assert!(disk_spin_rate(1.0) > disk_spin_rate(0.0));
        assert!(photon_spin_rate(1.0) > photon_spin_rate(0.0));
        assert!((disk_spin_rate(0.5) - 0.01).abs() < 1e-6);
    }

    #[test]
    fn spin_wraps_into_one_turn() {
        let spin = Spin { angle: TAU - 0.01 }.advance(0.02, 1.0);
        assert!(spin.angle >= 0.0 && spin.angle < 0.02);
    }

    #[test]
    fn clock_clamps_long_gaps() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.tick(1000.0), (0.0, 0.0));
        let (elapsed, delta) = clock.tick(1016.0);
        assert!((elapsed - 0.016).abs() < 1e-6);
        assert!((delta - 0.016).abs() < 1e-6);
        let (elapsed, delta) = clock.tick(6016.0);
        assert!((elapsed - 5.016).abs() < 1e-4);
        assert_eq!(delta, 0.1);
    }

    #[test]
    fn clock_ignores_timestamps_going_backwards() {
        let mut clock = FrameClock::new(0.1);
        clock.tick(500.0);
        let (_, delta) = clock.tick(400.0);
        assert_eq!(delta, 0.0);
    }

    #[test]
    fn driver_tick_collects_frame_state() {
        let config = SceneConfig::default();
        let mut driver = SceneDriver::new(config.clone(), lcg(7));
        let first = driver.tick(0.0, 0.0);
        assert_eq!(first.disk_angle, 0.0);
        assert_eq!(first.camera.radius, config.base_camera_radius);

        let second = driver.tick(1000.0 / 60.0, 1.0);
        assert!(second.disk_angle > 0.0);
        assert!(second.photon_angle > second.disk_angle);
        assert!((second.camera.radius - 5.0).abs() < 1e-5);
        assert_eq!(second.lens_intensity, 1.0);
        assert_eq!(driver.halo().len(), config.particle_count);
        assert_eq!(driver.photon_positions().len(), config.photon_count * 3);
    }

    #[test]
    fn non_finite_scroll_is_treated_as_top_of_page() {
        let mut driver = SceneDriver::new(SceneConfig::default(), lcg(3));
        let frame = driver.tick(0.0, f32::NAN);
        assert_eq!(frame.scroll, 0.0);
        assert!(frame.camera.eye.is_finite());
    }

    #[test]
    fn overscroll_extrapolates_without_blowing_up() {
        let mut driver = SceneDriver::new(SceneConfig::default(), lcg(11));
        for i in 0..600 {
            let frame = driver.tick(f64::from(i) * 16.0, 1.15);
            assert!(frame.camera.eye.is_finite());
            assert!(frame.horizon_scale.is_finite());
        }
        assert!(driver.halo().max_radius() <= driver.config().escape_radius * 1.01);
    }
}
