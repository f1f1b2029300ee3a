use std::f32::consts::{PI, TAU};

use crate::config::SceneConfig;

/// Point cloud of particles escaping the event horizon.
///
/// Positions are stored flat (`x, y, z` per particle) so they can be
/// uploaded to a vertex buffer as they are.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleHalo {
    positions: Vec<f32>,
}

/// Per reference frame growth factor of a particle's radius.
pub fn escape_rate(scroll: f32) -> f32 {
    (0.001 + scroll * 0.002).max(0.0)
}

fn spherical(radius: f32, theta: f32, phi: f32) -> [f32; 3] {
    [
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    ]
}

fn spawn(inner: f32, band: f32, random: &mut impl FnMut() -> f32) -> [f32; 3] {
    let radius = inner + random() * band;
    let theta = random() * TAU;
    let phi = random() * PI;
    spherical(radius, theta, phi)
}

impl ParticleHalo {
    pub fn new(config: &SceneConfig, random: &mut impl FnMut() -> f32) -> Self {
        let positions = (0..config.particle_count)
            .flat_map(|_| spawn(config.shell_radius, config.initial_band, random))
            .collect();
        Self { positions }
    }

    pub fn from_positions(positions: Vec<f32>) -> Self {
        debug_assert_eq!(positions.len() % 3, 0);
        Self { positions }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn radius(&self, index: usize) -> Option<f32> {
        let p = self.positions.get(index * 3..index * 3 + 3)?;
        Some((p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt())
    }

    pub fn max_radius(&self) -> f32 {
        (0..self.len())
            .filter_map(|i| self.radius(i))
            .fold(0.0, f32::max)
    }

    /// Advance every particle by `frames` reference frames.
    ///
    /// Particles past the escape radius respawn just outside the shell;
    /// the rest outside the shell move outward exponentially.
    pub fn step(
        &mut self,
        scroll: f32,
        frames: f32,
        config: &SceneConfig,
        random: &mut impl FnMut() -> f32,
    ) {
        let growth = (1.0 + escape_rate(scroll)).powf(frames);
        for p in self.positions.chunks_exact_mut(3) {
            let radius = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            if radius > config.escape_radius {
                p.copy_from_slice(&spawn(config.shell_radius, config.respawn_band, random));
            } else if radius >= config.shell_radius {
                for c in p.iter_mut() {
                    *c *= growth;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::tests::lcg;

    #[test]
    fn initial_particles_sit_in_the_shell() {
        let config = SceneConfig::default();
        let halo = ParticleHalo::new(&config, &mut lcg(1));
        assert_eq!(halo.len(), 1000);
        for i in 0..halo.len() {
            let r = halo.radius(i).unwrap();
            assert!(r >= config.shell_radius - 1e-5 && r <= config.shell_radius + config.initial_band + 1e-5);
        }
    }

    #[test]
    fn escaped_particle_respawns_in_band() {
        let config = SceneConfig::default();
        let mut halo = ParticleHalo::from_positions(vec![2.5, 0.0, 0.0, 0.0, -3.0, 0.0]);
        halo.step(0.4, 1.0, &config, &mut lcg(5));
        for i in 0..halo.len() {
            let r = halo.radius(i).unwrap();
            assert!(
                r >= config.shell_radius - 1e-5 && r <= config.shell_radius + config.respawn_band + 1e-5,
                "radius {r}"
            );
        }
    }

    #[test]
    fn particles_drift_outward_faster_with_scroll() {
        let config = SceneConfig::default();
        let start = vec![0.5, 0.0, 0.0];
        let mut slow = ParticleHalo::from_positions(start.clone());
        let mut fast = ParticleHalo::from_positions(start);
        slow.step(0.0, 1.0, &config, &mut lcg(0));
        fast.step(1.0, 1.0, &config, &mut lcg(0));
        assert!((slow.radius(0).unwrap() - 0.5 * 1.001).abs() < 1e-6);
        assert!((fast.radius(0).unwrap() - 0.5 * 1.003).abs() < 1e-6);
    }

    #[test]
    fn zero_frame_step_leaves_positions() {
        let config = SceneConfig::default();
        let mut halo = ParticleHalo::from_positions(vec![0.0, 0.3, 0.0]);
        halo.step(1.0, 0.0, &config, &mut lcg(0));
        assert_eq!(halo.positions(), &[0.0, 0.3, 0.0]);
    }

    #[test]
    fn strong_negative_overscroll_does_not_pull_particles_in() {
        assert_eq!(escape_rate(-2.0), 0.0);
    }
}
