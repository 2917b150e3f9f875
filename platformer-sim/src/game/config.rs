//! World Configuration
//!
//! Every constant the simulation reads lives in [`WorldConfig`], which is
//! built once and handed to [`crate::game::stepper::World::new`]. The
//! `Default` impl is the reference scenario: a 600x400 screen over a
//! 1000x400 world with two platforms.

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::core::rect::{Anchor, Rect};
use crate::core::vec2::Vec2;

/// RGBA colour, 0-255 per channel.
pub type Rgba = [u8; 4];

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The virtual world must be at least as large as the screen
    #[error("virtual world {virtual_size} is smaller than screen {screen_size}")]
    VirtualSmallerThanScreen {
        /// Configured virtual world size
        virtual_size: Vec2,
        /// Configured screen size
        screen_size: Vec2,
    },

    /// A size that must be strictly positive is not
    #[error("{what} must have positive width and height, got {size}")]
    NonPositiveSize {
        /// Which object the size belongs to
        what: &'static str,
        /// The offending size
        size: Vec2,
    },

    /// Target frame rate of zero
    #[error("fps must be greater than zero")]
    InvalidFps,

    /// Scroll trigger fractions out of order or outside [0, 1]
    #[error("scroll triggers must satisfy 0 <= left ({left}) < right ({right}) <= 1")]
    ThresholdOrder {
        /// Left trigger fraction
        left: f64,
        /// Right trigger fraction
        right: f64,
    },

    /// NaN or infinite constant or point
    #[error("{0} must be finite")]
    NonFiniteConstant(&'static str),
}

/// How the camera reacts when the player nears a screen edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollRule {
    /// Reference behaviour: moving left near the left edge nudges the
    /// camera right while it sits above `virtual_width - step`; moving
    /// right near the right edge nudges it left once it is at or above
    /// that mark. No clamping.
    #[default]
    Parity,
    /// Conventional follow: the camera moves the way the player moves and
    /// stays within `[half_screen_width, virtual_width - half_screen_width]`.
    Clamped,
}

/// Kinematic constants, in per-frame units at the reference rate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration added every step
    pub gravity: f64,
    /// Horizontal acceleration while a direction is held
    pub acceleration: f64,
    /// Linear drag coefficient (negative)
    pub friction: f64,
    /// Vertical velocity set by a grounded jump (negative = up)
    pub jump_impulse: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            acceleration: 0.6,
            friction: -0.12,
            jump_impulse: -10.0,
        }
    }
}

/// Scroll camera constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Fixed camera shift per scrolling step
    pub scroll_step: f64,
    /// Player x below this fraction of the screen width can trigger a left scroll
    pub left_trigger: f64,
    /// Player x above this fraction of the screen width can trigger a right scroll
    pub right_trigger: f64,
    /// Scroll rule
    pub rule: ScrollRule,
    /// Initial focal point; `None` centres it on the first screen of the world
    pub start: Option<Vec2>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            scroll_step: 10.0,
            left_trigger: 0.25,
            right_trigger: 0.75,
            rule: ScrollRule::Parity,
            start: None,
        }
    }
}

/// Player body layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Bounding box size
    pub size: Vec2,
    /// Starting position (screen space)
    pub spawn: Vec2,
    /// Which box point `spawn` places; later steps anchor at bottom-centre
    pub anchor: Anchor,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(20.0, 40.0),
            spawn: Vec2::new(0.0, 300.0),
            anchor: Anchor::MidBottom,
        }
    }
}

/// One static platform, placed by its top-right corner in world space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    /// Width and height
    pub size: Vec2,
    /// Top-right corner in world coordinates
    pub top_right: Vec2,
}

/// Colours handed to the renderer alongside draw commands.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Screen clear colour
    pub background: Rgba,
    /// Player fill
    pub player: Rgba,
    /// Platform fill
    pub platform: Rgba,
    /// Debug overlay panel fill
    pub overlay: Rgba,
    /// Debug overlay panel size
    pub overlay_size: Vec2,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [100, 200, 200, 255],
            player: [255, 0, 0, 255],
            platform: [100, 100, 200, 255],
            overlay: [0, 0, 0, 200],
            overlay_size: Vec2::new(300.0, 200.0),
        }
    }
}

/// Complete, immutable simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Visible viewport size
    pub screen_size: Vec2,
    /// Scrollable world size (>= screen)
    pub virtual_size: Vec2,
    /// Target frame rate of the host loop
    pub fps: u32,
    /// Kinematics
    pub physics: PhysicsConfig,
    /// Scroll camera
    pub camera: CameraConfig,
    /// Player body
    pub player: PlayerConfig,
    /// Platforms in registration order (collision tie-break order)
    pub platforms: Vec<PlatformSpec>,
    /// Render colours
    pub palette: Palette,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            screen_size: Vec2::new(600.0, 400.0),
            virtual_size: Vec2::new(1000.0, 400.0),
            fps: 60,
            physics: PhysicsConfig::default(),
            camera: CameraConfig::default(),
            player: PlayerConfig::default(),
            platforms: vec![
                PlatformSpec {
                    size: Vec2::new(600.0, 10.0),
                    top_right: Vec2::new(600.0, 390.0),
                },
                PlatformSpec {
                    size: Vec2::new(200.0, 10.0),
                    top_right: Vec2::new(400.0, 300.0),
                },
            ],
            palette: Palette::default(),
        }
    }
}

impl WorldConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check the invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let constants = [
            ("gravity", self.physics.gravity),
            ("acceleration", self.physics.acceleration),
            ("friction", self.physics.friction),
            ("jump_impulse", self.physics.jump_impulse),
            ("scroll_step", self.camera.scroll_step),
        ];
        for (name, value) in constants {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteConstant(name));
            }
        }

        let points = [("spawn", Some(self.player.spawn)), ("camera start", self.camera.start)];
        for (name, point) in points {
            if point.is_some_and(|p| !p.is_finite()) {
                return Err(ConfigError::NonFiniteConstant(name));
            }
        }
        if self.platforms.iter().any(|p| !p.top_right.is_finite()) {
            return Err(ConfigError::NonFiniteConstant("platform top_right"));
        }

        for (what, size) in [
            ("screen", self.screen_size),
            ("virtual world", self.virtual_size),
            ("player", self.player.size),
        ] {
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(ConfigError::NonPositiveSize { what, size });
            }
        }
        for platform in &self.platforms {
            if !(platform.size.x > 0.0 && platform.size.y > 0.0) {
                return Err(ConfigError::NonPositiveSize {
                    what: "platform",
                    size: platform.size,
                });
            }
        }

        if self.virtual_size.x < self.screen_size.x || self.virtual_size.y < self.screen_size.y {
            return Err(ConfigError::VirtualSmallerThanScreen {
                virtual_size: self.virtual_size,
                screen_size: self.screen_size,
            });
        }

        if self.fps == 0 {
            return Err(ConfigError::InvalidFps);
        }

        let (left, right) = (self.camera.left_trigger, self.camera.right_trigger);
        if !(0.0..=1.0).contains(&left) || !(0.0..=1.0).contains(&right) || left >= right {
            return Err(ConfigError::ThresholdOrder { left, right });
        }

        Ok(())
    }

    /// Viewport rectangle at the origin.
    pub fn screen_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.screen_size.x, self.screen_size.y)
    }

    /// Half the viewport width.
    #[inline]
    pub fn half_screen_width(&self) -> f64 {
        self.screen_size.x / 2.0
    }

    /// Initial camera focal point.
    pub fn camera_start(&self) -> Vec2 {
        self.camera
            .start
            .unwrap_or(Vec2::new(self.half_screen_width(), self.screen_size.y / 2.0))
    }

    /// Nominal frame duration in seconds.
    pub fn target_dt(&self) -> f64 {
        1.0 / self.fps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_constants() {
        let config = WorldConfig::default();
        assert_eq!(config.screen_size, Vec2::new(600.0, 400.0));
        assert_eq!(config.virtual_size, Vec2::new(1000.0, 400.0));
        assert_eq!(config.physics.gravity, 0.5);
        assert_eq!(config.physics.acceleration, 0.6);
        assert_eq!(config.physics.friction, -0.12);
        assert_eq!(config.physics.jump_impulse, -10.0);
        assert_eq!(config.camera.scroll_step, 10.0);
        assert_eq!(config.fps, 60);
        assert_eq!(config.platforms.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_camera_start_defaults_to_first_screen() {
        let config = WorldConfig::default();
        assert_eq!(config.camera_start(), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WorldConfig::from_json_str(
            r#"{ "fps": 30, "camera": { "rule": "clamped" }, "physics": { "gravity": 1.0 } }"#,
        )
        .unwrap();

        assert_eq!(config.fps, 30);
        assert_eq!(config.camera.rule, ScrollRule::Clamped);
        assert_eq!(config.camera.scroll_step, 10.0);
        assert_eq!(config.physics.gravity, 1.0);
        assert_eq!(config.physics.jump_impulse, -10.0);
        assert_eq!(config.platforms, WorldConfig::default().platforms);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = WorldConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_virtual_smaller_than_screen_rejected() {
        let config = WorldConfig {
            virtual_size: Vec2::new(500.0, 400.0),
            ..WorldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::VirtualSmallerThanScreen { .. })
        ));
    }

    #[test]
    fn test_bad_triggers_rejected() {
        let mut config = WorldConfig::default();
        config.camera.left_trigger = 0.8;
        assert!(matches!(config.validate(), Err(ConfigError::ThresholdOrder { .. })));

        config.camera.left_trigger = -0.1;
        config.camera.right_trigger = 0.5;
        assert!(matches!(config.validate(), Err(ConfigError::ThresholdOrder { .. })));
    }

    #[test]
    fn test_zero_fps_and_bad_sizes_rejected() {
        let config = WorldConfig { fps: 0, ..WorldConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidFps)));

        let mut config = WorldConfig::default();
        config.platforms.push(PlatformSpec {
            size: Vec2::new(0.0, 10.0),
            top_right: Vec2::new(100.0, 100.0),
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveSize { what: "platform", .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_values() {
        let err = ConfigError::ThresholdOrder { left: 0.8, right: 0.2 };
        assert_eq!(
            err.to_string(),
            "scroll triggers must satisfy 0 <= left (0.8) < right (0.2) <= 1"
        );

        let err = ConfigError::NonPositiveSize { what: "player", size: Vec2::new(0.0, 40.0) };
        assert_eq!(err.to_string(), "player must have positive width and height, got (0.000, 40.000)");
    }

    #[test]
    fn test_non_finite_constant_rejected() {
        let mut config = WorldConfig::default();
        config.physics.friction = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteConstant("friction"))
        ));

        let mut config = WorldConfig::default();
        config.camera.start = Some(Vec2::new(f64::INFINITY, 200.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteConstant("camera start"))
        ));

        let mut config = WorldConfig::default();
        config.platforms[1].top_right.y = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteConstant("platform top_right"))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = WorldConfig::load("/definitely/not/here/platformer.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
