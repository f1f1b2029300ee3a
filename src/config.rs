//! Site configuration.
//!
//! Defaults are compiled in. The host page may override any subset of them
//! with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "submit_delay_ms": 1500, "scene": { "particle_count": 600 } }
//! </script>
//! ```

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed site config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub glyph: String,
}

impl Default for SocialLink {
    fn default() -> Self {
        Self {
            label: String::new(),
            href: String::from("#"),
            glyph: String::from("•"),
        }
    }
}

impl SocialLink {
    fn new(label: &str, href: &str, glyph: &str) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            glyph: glyph.into(),
        }
    }
}

/// Links that leave the site; these open in a new tab.
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub resume_path: String,
    pub resume_file_name: String,
    pub socials: Vec<SocialLink>,
    /// How long the simulated outbox takes to "send".
    pub submit_delay_ms: u32,
    /// How long the success banner stays up.
    pub success_window_ms: u32,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub scene: SceneConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Prince Kumar".into(),
            tagline: "Full-Stack Web Developer & Digital Creator".into(),
            summary: "Passionate about creating beautiful, functional websites and web applications. \
                      Currently pursuing Computer Science while building digital solutions for businesses across India."
                .into(),
            email: "arjun.dev@example.com".into(),
            phone: "+91 98765 43210".into(),
            location: "Delhi, India".into(),
            resume_path: "/resume.pdf".into(),
            resume_file_name: "Prince_Kumar_Resume.pdf".into(),
            socials: vec![
                SocialLink::new("GitHub", "https://github.com/arjun-kumar", "GH"),
                SocialLink::new("LinkedIn", "https://linkedin.com/in/arjun-kumar", "in"),
                SocialLink::new("Twitter", "https://twitter.com/arjun_dev", "𝕏"),
            ],
            submit_delay_ms: 2000,
            success_window_ms: 5000,
            log_level: "info".into(),
            scene: SceneConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse an override block and fill the gaps from the defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = serde_json::from_str(text)?;
        config.scene = config.scene.sanitized();
        Ok(config)
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    /// `tel:` form of the phone number.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

/// Constants of the background scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub base_camera_radius: f32,
    /// Added to the camera radius at scroll fraction 1.
    pub camera_radius_gain: f32,
    /// Radians per second.
    pub camera_orbit_rate: f32,
    pub horizon_radius: f32,
    /// Inner edge of the particle spawn shell.
    pub shell_radius: f32,
    /// Width of the band particles respawn into.
    pub respawn_band: f32,
    /// Width of the band particles start in.
    pub initial_band: f32,
    pub particle_count: usize,
    pub escape_radius: f32,
    pub photon_count: usize,
    pub photon_radius: f32,
    /// Longest frame step fed to the simulation, in seconds.
    pub max_frame_delta: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            base_camera_radius: 3.0,
            camera_radius_gain: 2.0,
            camera_orbit_rate: 0.1,
            horizon_radius: 0.15,
            shell_radius: 0.16,
            respawn_band: 0.02,
            initial_band: 0.1,
            particle_count: 1000,
            escape_radius: 2.0,
            photon_count: 20,
            photon_radius: 0.25,
            max_frame_delta: 0.1,
            fov_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Upper bound on particle and photon counts; larger values are clamped.
pub const MAX_POINTS: usize = 100_000;

impl SceneConfig {
    /// Replace values that would break the scene with their defaults.
    pub fn sanitized(self) -> Self {
        let d = SceneConfig::default();
        let positive = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        let finite = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };
        let count = |n: usize, fallback: usize| if n == 0 { fallback } else { n.min(MAX_POINTS) };

        let shell_radius = positive(self.shell_radius, d.shell_radius);
        let escape_radius = if self.escape_radius.is_finite() && self.escape_radius > shell_radius {
            self.escape_radius
        } else {
            d.escape_radius.max(shell_radius * 2.0)
        };
        let near = positive(self.near, d.near);
        let far = if self.far.is_finite() && self.far > near {
            self.far
        } else {
            d.far
        };
        let fov_degrees = if self.fov_degrees > 1.0 && self.fov_degrees < 179.0 {
            self.fov_degrees
        } else {
            d.fov_degrees
        };

        Self {
            base_camera_radius: positive(self.base_camera_radius, d.base_camera_radius),
            camera_radius_gain: finite(self.camera_radius_gain, d.camera_radius_gain),
            camera_orbit_rate: finite(self.camera_orbit_rate, d.camera_orbit_rate),
            horizon_radius: positive(self.horizon_radius, d.horizon_radius),
            shell_radius,
            respawn_band: self.respawn_band.max(0.0),
            initial_band: self.initial_band.max(0.0),
            particle_count: count(self.particle_count, d.particle_count),
            escape_radius,
            photon_count: count(self.photon_count, d.photon_count),
            photon_radius: positive(self.photon_radius, d.photon_radius),
            max_frame_delta: positive(self.max_frame_delta, d.max_frame_delta),
            fov_degrees,
            near,
            far,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_the_rest() {
        let config = SiteConfig::from_json(
            r#"{ "submit_delay_ms": 10, "scene": { "particle_count": 64 } }"#,
        )
        .unwrap();
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.success_window_ms, 5000);
        assert_eq!(config.scene.particle_count, 64);
        assert_eq!(config.scene.escape_radius, 2.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = SiteConfig::from_json("{ nope").unwrap_err();
        assert!(err.to_string().starts_with("malformed site config"));
    }

    #[test]
    fn nonsense_scene_values_fall_back() {
        let config = SiteConfig::from_json(
            r#"{ "scene": { "particle_count": 0, "escape_radius": 0.01, "near": -1.0, "fov_degrees": 400 } }"#,
        )
        .unwrap();
        let d = SceneConfig::default();
        assert_eq!(config.scene.particle_count, d.particle_count);
        assert!(config.scene.escape_radius > config.scene.shell_radius);
        assert_eq!(config.scene.near, d.near);
        assert_eq!(config.scene.fov_degrees, d.fov_degrees);
    }

    #[test]
    fn huge_point_counts_are_clamped() {
        let config = SiteConfig::from_json(
            r#"{ "scene": { "particle_count": 1000000000, "photon_count": 5000000 } }"#,
        )
        .unwrap();
        assert_eq!(config.scene.particle_count, MAX_POINTS);
        assert_eq!(config.scene.photon_count, MAX_POINTS);

        let config = SiteConfig::from_json(r#"{ "scene": { "particle_count": 2500 } }"#).unwrap();
        assert_eq!(config.scene.particle_count, 2500);
    }

    #[test]
    fn external_links_need_a_scheme() {
        assert!(is_external("https://github.com/someone"));
        assert!(is_external("http://example.com"));
        assert!(!is_external("mailto:hi@example.com"));
        assert!(!is_external("/resume.pdf"));
        assert!(!is_external("#contact"));
        assert!(!is_external("httpbin"));
    }

    #[test]
    fn log_level_parsing() {
        let mut config = SiteConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "DEBUG".into();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn phone_href_strips_formatting() {
        assert_eq!(SiteConfig::default().phone_href(), "tel:+919876543210");
    }
}
