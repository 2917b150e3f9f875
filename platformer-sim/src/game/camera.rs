//! Scroll Camera
//!
//! Edge-triggered horizontal follow. The camera only moves while the
//! player is accelerating and sits near a screen edge, and then by a fixed
//! step per frame regardless of `dt` or speed.

use serde::{Serialize, Deserialize};

use crate::core::rect::Rect;
use crate::core::vec2::Vec2;
use crate::game::body::KinematicBody;
use crate::game::config::{CameraConfig, ScrollRule, WorldConfig};
use crate::game::platform::Platform;

/// Whether the camera moved on the last update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollState {
    /// No shift this step
    #[default]
    Idle,
    /// Shifted by a non-zero delta this step
    Scrolling,
}

/// Camera focal point within the virtual world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    position: Vec2,
    virtual_size: Vec2,
    screen_size: Vec2,
    scroll_delta: f64,
    state: ScrollState,
    config: CameraConfig,
}

impl Camera {
    /// Create a camera at the configured start point.
    pub fn new(world: &WorldConfig) -> Self {
        Self {
            position: world.camera_start(),
            virtual_size: world.virtual_size,
            screen_size: world.screen_size,
            scroll_delta: 0.0,
            state: ScrollState::Idle,
            config: world.camera,
        }
    }

    /// Focal point in world coordinates.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Horizontal shift applied by the last update (signed).
    #[inline]
    pub fn scroll_delta(&self) -> f64 {
        self.scroll_delta
    }

    /// Scroll state after the last update.
    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// World x shown at the screen's left edge.
    #[inline]
    pub fn view_left(&self) -> f64 {
        self.position.x - self.screen_size.x / 2.0
    }

    /// Screen-space box of a platform.
    #[inline]
    pub fn project(&self, platform: &Platform) -> Rect {
        platform.screen_rect(self.view_left())
    }

    /// Update from the tracked body's state after integration.
    pub fn track(&mut self, body: &KinematicBody) -> f64 {
        self.update(body.acceleration(), body.velocity(), body.position())
    }

    /// Advance the scroll state machine one step. Returns the shift applied.
    ///
    /// Zero horizontal acceleration means idle: nothing moves whatever the
    /// velocity. Otherwise the configured [`ScrollRule`] decides.
    pub fn update(&mut self, acceleration: Vec2, velocity: Vec2, position: Vec2) -> f64 {
        let delta = if acceleration.x == 0.0 {
            0.0
        } else {
            match self.config.rule {
                ScrollRule::Parity => self.parity_shift(velocity.x, position.x),
                ScrollRule::Clamped => self.clamped_shift(velocity.x, position.x),
            }
        };

        self.position.x += delta;
        self.scroll_delta = delta;
        self.state = if delta != 0.0 {
            ScrollState::Scrolling
        } else {
            ScrollState::Idle
        };
        delta
    }

    fn triggers(&self) -> (f64, f64) {
        (
            self.screen_size.x * self.config.left_trigger,
            self.screen_size.x * self.config.right_trigger,
        )
    }

    // Both branches compare against the same far-right mark and the left
    // branch moves the camera right; this mirrors the reference scroll
    // behaviour and is kept as-is under `ScrollRule::Parity`.
    fn parity_shift(&self, vx: f64, px: f64) -> f64 {
        let (left_edge, right_edge) = self.triggers();
        let step = self.config.scroll_step;
        let mark = self.virtual_size.x - step;

        if vx < 0.0 && px < left_edge && self.position.x > mark {
            step
        } else if vx > 0.0 && px > right_edge && self.position.x >= mark {
            -step
        } else {
            0.0
        }
    }

    fn clamped_shift(&self, vx: f64, px: f64) -> f64 {
        let (left_edge, right_edge) = self.triggers();
        let step = self.config.scroll_step;
        let half = self.screen_size.x / 2.0;
        let (min_x, max_x) = (half, self.virtual_size.x - half);

        if vx < 0.0 && px < left_edge && self.position.x > min_x {
            -step.min(self.position.x - min_x)
        } else if vx > 0.0 && px > right_edge && self.position.x < max_x {
            step.min(max_x - self.position.x)
        } else {
            0.0
        }
    }
}
