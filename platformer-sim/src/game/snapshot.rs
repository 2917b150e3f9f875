//! Debug Snapshot
//!
//! Read-only projection of the world for the on-screen overlay. Capturing
//! never mutates simulation state.

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vec2;
use crate::game::stepper::World;

/// Values shown by the debug overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DebugSnapshot {
    /// Step counter
    pub step: u64,
    /// Viewport size
    pub screen_size: Vec2,
    /// Target frame rate
    pub fps: u32,
    /// Delta of the last step, seconds
    pub dt: f64,
    /// Elapsed time, seconds
    pub elapsed: f64,
    /// Player position
    pub position: Vec2,
    /// Player velocity
    pub velocity: Vec2,
    /// Player acceleration from the last step
    pub acceleration: Vec2,
    /// Camera focal point
    pub camera: Vec2,
    /// Whether the player is standing on a platform
    pub grounded: bool,
}

impl DebugSnapshot {
    /// Capture the current state of `world`.
    ///
    /// `elapsed` is supplied by the caller; hosts with a wall clock pass
    /// real time, headless runs pass [`World::elapsed`].
    pub fn capture(world: &World, elapsed: f64) -> Self {
        let body = world.body();
        Self {
            step: world.step_count(),
            screen_size: world.config().screen_size,
            fps: world.config().fps,
            dt: world.last_dt(),
            elapsed,
            position: body.position(),
            velocity: body.velocity(),
            acceleration: body.acceleration(),
            camera: world.camera().position(),
            grounded: world.is_grounded(),
        }
    }

    /// Overlay text, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("width: {}", self.screen_size.x),
            format!("height: {}", self.screen_size.y),
            format!("FPS: {}", self.fps),
            format!("dt: {}", self.dt),
            format!("time(s): {:.6}", self.elapsed),
            format!("pos: {}", self.position),
            format!("vel: {}", self.velocity),
            format!("acc: {}", self.acceleration),
            format!("camera: {}", self.camera),
            format!("grounded: {}", self.grounded),
        ]
    }
}

impl fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::WorldConfig;
    use crate::game::input::InputFrame;

    #[test]
    fn test_capture_reads_world() {
        let mut world = World::new(WorldConfig::default());
        world.step(InputFrame::right(), 0.016);

        let snapshot = DebugSnapshot::capture(&world, 1.5);
        assert_eq!(snapshot.step, 1);
        assert_eq!(snapshot.dt, 0.016);
        assert_eq!(snapshot.elapsed, 1.5);
        assert_eq!(snapshot.position, world.body().position());
        assert_eq!(snapshot.velocity, world.body().velocity());
        assert_eq!(snapshot.acceleration, world.body().acceleration());
        assert_eq!(snapshot.camera, world.camera().position());
    }

    #[test]
    fn test_overlay_lines() {
        let world = World::new(WorldConfig::default());
        let lines = DebugSnapshot::capture(&world, 2.0).lines();

        assert_eq!(lines[0], "width: 600");
        assert_eq!(lines[1], "height: 400");
        assert_eq!(lines[2], "FPS: 60");
        assert_eq!(lines[3], "dt: 0");
        assert_eq!(lines[4], "time(s): 2.000000");
        assert_eq!(lines[5], "pos: (0.000, 300.000)");
    }

    #[test]
    fn test_display_joins_lines() {
        let world = World::new(WorldConfig::default());
        let snapshot = DebugSnapshot::capture(&world, 0.0);
        let text = snapshot.to_string();
        assert_eq!(text.lines().count(), snapshot.lines().len());
    }
}
