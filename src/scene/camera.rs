use std::f32::consts::PI;

use glam::{Mat4, Vec3};

use crate::config::SceneConfig;

/// Orbiting camera, always looking at the scene centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub radius: f32,
    pub angle: f32,
}

impl CameraPose {
    /// Radius is linear in `scroll`; the orbit angle advances with time and
    /// is offset by half a turn over the full page.
    pub fn at(elapsed: f32, scroll: f32, config: &SceneConfig) -> Self {
        let radius = orbit_radius(scroll, config);
        let angle = elapsed * config.camera_orbit_rate + scroll * PI;
        let eye = Vec3::new(angle.cos() * radius, (scroll * PI).sin() * 0.5, angle.sin() * radius);
        Self { eye, radius, angle }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, Vec3::ZERO, Vec3::Y)
    }
}

pub fn orbit_radius(scroll: f32, config: &SceneConfig) -> f32 {
    config.base_camera_radius + scroll * config.camera_radius_gain
}

/// GL clip-space projection for a viewport of `width`×`height` pixels.
pub fn projection(width: u32, height: u32, config: &SceneConfig) -> Mat4 {
    let aspect = if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    };
    Mat4::perspective_rh_gl(config.fov_degrees.to_radians(), aspect, config.near, config.far)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_interpolates_linearly() {
        let config = SceneConfig::default();
        assert_eq!(CameraPose::at(0.0, 0.0, &config).radius, config.base_camera_radius);
        assert_eq!(
            CameraPose::at(0.0, 1.0, &config).radius,
            config.base_camera_radius + config.camera_radius_gain
        );
        let half = orbit_radius(0.5, &config);
        assert!((half - 4.0).abs() < 1e-6);
    }

    #[test]
    fn eye_sits_on_the_orbit() {
        let config = SceneConfig::default();
        for &(t, s) in &[(0.0, 0.0), (3.0, 0.25), (12.5, 0.9)] {
            let pose = CameraPose::at(t, s, &config);
            let planar = (pose.eye.x * pose.eye.x + pose.eye.z * pose.eye.z).sqrt();
            assert!((planar - pose.radius).abs() < 1e-4);
        }
    }

    #[test]
    fn starts_on_positive_x_axis() {
        let pose = CameraPose::at(0.0, 0.0, &SceneConfig::default());
        assert!((pose.eye - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn view_maps_origin_in_front_of_camera() {
        let pose = CameraPose::at(2.0, 0.3, &SceneConfig::default());
        let p = pose.view().transform_point3(Vec3::ZERO);
        assert!(p.z < 0.0);
        assert!((p.z.abs() - pose.eye.length()).abs() < 1e-4);
    }

    #[test]
    fn degenerate_viewport_falls_back_to_square() {
        let config = SceneConfig::default();
        assert_eq!(projection(0, 0, &config), projection(10, 10, &config));
    }
}
