//! Static Platforms

use serde::{Serialize, Deserialize};

use crate::core::rect::{Anchor, Rect};
use crate::core::vec2::Vec2;
use crate::game::config::PlatformSpec;

/// An immovable platform placed in world space.
///
/// Only its screen projection changes, as a pure function of the camera's
/// horizontal view offset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    world_rect: Rect,
}

impl Platform {
    /// Create a platform whose top-right corner sits at `top_right` (world space).
    pub fn new(size: Vec2, top_right: Vec2) -> Self {
        Self {
            world_rect: Rect::anchored(Anchor::TopRight, top_right, size),
        }
    }

    /// Bounding box in world space.
    #[inline]
    pub fn world_rect(&self) -> Rect {
        self.world_rect
    }

    /// Bounding box on screen, given the world x shown at the screen's left edge.
    #[inline]
    pub fn screen_rect(&self, view_left: f64) -> Rect {
        self.world_rect.translated(Vec2::new(-view_left, 0.0))
    }
}

impl From<&PlatformSpec> for Platform {
    fn from(spec: &PlatformSpec) -> Self {
        Self::new(spec.size, spec.top_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_top_right() {
        let platform = Platform::new(Vec2::new(200.0, 10.0), Vec2::new(400.0, 300.0));
        assert_eq!(platform.world_rect(), Rect::new(200.0, 300.0, 200.0, 10.0));
    }

    #[test]
    fn test_projection_only_shifts_x() {
        let platform = Platform::new(Vec2::new(600.0, 10.0), Vec2::new(600.0, 390.0));

        assert_eq!(platform.screen_rect(0.0), platform.world_rect());
        assert_eq!(platform.screen_rect(10.0), Rect::new(-10.0, 390.0, 600.0, 10.0));
        assert_eq!(platform.screen_rect(-20.0), Rect::new(20.0, 390.0, 600.0, 10.0));
        // World placement is untouched by projection
        assert_eq!(platform.world_rect().right(), 600.0);
    }
}
