//! Kinematic Body
//!
//! Position, velocity and acceleration of the player, plus the integration
//! step that advances them.
//!
//! ## Integration model
//!
//! Constants are per-frame quantities at the reference rate, so the
//! velocity update ignores `dt` while the position update adds a
//! `0.5 * dt^2 * acceleration` correction on top of the velocity:
//!
//! ```text
//! a  = (±accel | 0, gravity)
//! a.x += v.x * friction          (only while a direction is held)
//! v  += a
//! p  += v + 0.5 * dt * dt * a
//! ```
//!
//! Releasing both directions zeroes `v.x` outright instead of letting drag
//! bleed it off. A large `dt` is accepted and simply yields a larger
//! positional correction.

use serde::{Serialize, Deserialize};

use crate::core::rect::{Anchor, Rect};
use crate::core::vec2::Vec2;
use crate::game::config::{PhysicsConfig, PlayerConfig};
use crate::game::input::{Horizontal, InputFrame};

/// The player's kinematic state.
///
/// The spawn anchor only places the initial box. From the first mutation on,
/// `position` is the box's bottom-centre and every mutator re-derives
/// `bounding_box` from it, so it is never stale when a collision test reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    size: Vec2,
    bounding_box: Rect,
}

impl KinematicBody {
    /// Create a body at rest, with its initial box placed by `spawn_anchor`.
    pub fn new(position: Vec2, size: Vec2, spawn_anchor: Anchor) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            size,
            bounding_box: Rect::anchored(spawn_anchor, position, size),
        }
    }

    /// Create the player body described by the config.
    pub fn from_config(player: &PlayerConfig) -> Self {
        Self::new(player.spawn, player.size, player.anchor)
    }

    /// Current position (the anchor point of the box).
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Acceleration applied during the last integration.
    #[inline]
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Bounding box derived from the current position.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    /// Teleport the body.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.sync_box();
    }

    /// Overwrite the velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Drop the horizontal component of the last acceleration.
    pub fn clear_horizontal_acceleration(&mut self) {
        self.acceleration.x = 0.0;
    }

    /// Apply the jump impulse if the body is standing on something.
    ///
    /// Returns whether the jump happened.
    pub fn try_jump(&mut self, grounded: bool, impulse: f64) -> bool {
        if grounded {
            self.velocity.y = impulse;
        }
        grounded
    }

    /// Advance one step.
    ///
    /// `grounded` is the platform test against the box from before this
    /// step; jump is level-sensitive and fires on every grounded step it is
    /// held. Returns whether a jump was applied.
    pub fn integrate(
        &mut self,
        input: InputFrame,
        physics: &PhysicsConfig,
        dt: f64,
        grounded: bool,
    ) -> bool {
        let horizontal = input.horizontal();

        self.acceleration = Vec2::new(0.0, physics.gravity);
        match horizontal {
            Horizontal::Right => self.acceleration.x = physics.acceleration,
            Horizontal::Left => self.acceleration.x = -physics.acceleration,
            Horizontal::Neutral => {
                self.acceleration.x = 0.0;
                self.velocity.x = 0.0;
            }
        }

        let jumped = input.jump_pressed() && self.try_jump(grounded, physics.jump_impulse);

        if horizontal != Horizontal::Neutral {
            self.acceleration.x += self.velocity.x * physics.friction;
        }

        self.velocity += self.acceleration;
        let correction = 0.5 * dt * dt;
        self.position += self.velocity + self.acceleration * correction;
        self.sync_box();

        jumped
    }

    /// Rest on a surface whose top edge is at `top`.
    ///
    /// The body sinks one unit into the surface so the next overlap test
    /// still reports contact.
    pub fn land_on(&mut self, top: f64) {
        self.position.y = top + 1.0;
        self.velocity.y = 0.0;
        self.sync_box();
    }

    /// Keep the box inside `bounds`, pulling `position` back from the
    /// clamped box. Returns whether a clamp happened.
    pub fn clamp_within(&mut self, bounds: &Rect) -> bool {
        if bounds.contains(&self.bounding_box) {
            return false;
        }
        self.bounding_box.clamp_within(bounds);
        self.position = self.bounding_box.mid_bottom();
        true
    }

    fn sync_box(&mut self) {
        self.bounding_box.set_anchor(Anchor::MidBottom, self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body_at(x: f64, y: f64) -> KinematicBody {
        KinematicBody::new(Vec2::new(x, y), Vec2::new(20.0, 40.0), Anchor::MidBottom)
    }

    #[test]
    fn test_new_body_is_at_rest() {
        let body = body_at(300.0, 200.0);
        assert_eq!(body.velocity(), Vec2::ZERO);
        assert_eq!(body.acceleration(), Vec2::ZERO);
        assert_eq!(body.bounding_box(), Rect::new(290.0, 160.0, 20.0, 40.0));
    }

    #[test]
    fn test_left_trajectory_pinned() {
        let physics = PhysicsConfig::default();
        let mut body = body_at(300.0, 200.0);

        body.integrate(InputFrame::left(), &physics, 0.0167, false);
        assert_eq!(body.velocity(), Vec2::new(-0.6, 0.5));
        assert_eq!(body.position(), Vec2::new(299.399916333, 200.5000697225));

        body.integrate(InputFrame::left(), &physics, 0.0167, false);
        assert_eq!(body.velocity(), Vec2::new(-1.1280000000000001, 1.0));
        assert_eq!(body.acceleration(), Vec2::new(-0.528, 0.5));
        assert_eq!(body.position(), Vec2::new(298.27184270604005, 201.500139445));

        for _ in 2..60 {
            body.integrate(InputFrame::left(), &physics, 0.0167, false);
        }
        assert_eq!(body.velocity(), Vec2::new(-4.997666916225636, 30.0));
        assert_eq!(body.position(), Vec2::new(36.648860485991605, 1115.0041833500004));
        assert_eq!(
            body.bounding_box(),
            Rect::anchored(Anchor::MidBottom, body.position(), Vec2::new(20.0, 40.0))
        );
    }

    #[test]
    fn test_drag_limits_speed() {
        let physics = PhysicsConfig::default();
        let limit = physics.acceleration / -physics.friction;
        let mut body = body_at(300.0, 200.0);

        let mut previous = 0.0f64;
        for _ in 0..200 {
            body.integrate(InputFrame::right(), &physics, 1.0 / 60.0, false);
            let vx = body.velocity().x;
            assert!(vx > previous && vx < limit);
            previous = vx;
        }
        assert!((limit - previous).abs() < 1e-6);
    }

    #[test]
    fn test_neutral_input_hard_stops() {
        let physics = PhysicsConfig::default();
        let mut body = body_at(300.0, 200.0);
        body.set_velocity(Vec2::new(4.2, 1.0));

        body.integrate(InputFrame::IDLE, &physics, 1.0 / 60.0, false);

        assert_eq!(body.velocity().x, 0.0);
        assert_eq!(body.acceleration().x, 0.0);
        assert_eq!(body.position().x, 300.0);
    }

    #[test]
    fn test_jump_requires_ground() {
        let physics = PhysicsConfig::default();

        let mut airborne = body_at(300.0, 200.0);
        airborne.set_velocity(Vec2::new(0.0, 3.0));
        let jumped = airborne.integrate(InputFrame::jump(), &physics, 0.0, false);
        assert!(!jumped);
        assert_eq!(airborne.velocity().y, 3.5);

        let mut grounded = body_at(300.0, 391.0);
        let jumped = grounded.integrate(InputFrame::jump(), &physics, 0.0, true);
        assert!(jumped);
        assert_eq!(grounded.velocity().y, physics.jump_impulse + physics.gravity);
    }

    #[test]
    fn test_try_jump_sets_impulse() {
        let mut body = body_at(0.0, 0.0);
        assert!(!body.try_jump(false, -10.0));
        assert_eq!(body.velocity().y, 0.0);
        assert!(body.try_jump(true, -10.0));
        assert_eq!(body.velocity().y, -10.0);
    }

    #[test]
    fn test_land_on_snaps_one_unit_down() {
        let mut body = body_at(300.0, 395.0);
        body.set_velocity(Vec2::new(1.0, 7.5));
        body.land_on(390.0);

        assert_eq!(body.position().y, 391.0);
        assert_eq!(body.velocity(), Vec2::new(1.0, 0.0));
        assert_eq!(body.bounding_box().bottom(), 391.0);
    }

    #[test]
    fn test_clamp_resyncs_position() {
        let screen = Rect::new(0.0, 0.0, 600.0, 400.0);
        let mut body = body_at(595.0, 300.0);

        assert!(body.clamp_within(&screen));
        assert!(screen.contains(&body.bounding_box()));
        assert_eq!(body.position(), Vec2::new(590.0, 300.0));
        assert_eq!(body.position(), body.bounding_box().mid_bottom());

        assert!(!body.clamp_within(&screen));
    }

    #[test]
    fn test_top_right_anchor_only_places_spawn_box() {
        let physics = PhysicsConfig::default();
        let mut body = KinematicBody::new(Vec2::new(0.0, 300.0), Vec2::new(20.0, 40.0), Anchor::TopRight);
        assert_eq!(body.bounding_box(), Rect::new(-20.0, 300.0, 20.0, 40.0));

        body.integrate(InputFrame::IDLE, &physics, 0.0, false);
        assert_eq!(body.position(), Vec2::new(0.0, 300.5));
        assert_eq!(body.bounding_box(), Rect::new(-10.0, 260.5, 20.0, 40.0));

        body.land_on(390.0);
        assert_eq!(body.bounding_box().bottom(), 391.0);
    }

    #[test]
    fn test_top_right_spawn_box_clamps_to_bottom_centre() {
        let mut body = KinematicBody::new(Vec2::new(0.0, 300.0), Vec2::new(20.0, 40.0), Anchor::TopRight);
        let screen = Rect::new(0.0, 0.0, 600.0, 400.0);

        assert!(body.clamp_within(&screen));
        assert_eq!(body.bounding_box(), Rect::new(0.0, 300.0, 20.0, 40.0));
        assert_eq!(body.position(), Vec2::new(10.0, 340.0));
    }

    #[test]
    fn test_huge_dt_is_tolerated() {
        let physics = PhysicsConfig::default();
        let mut body = body_at(300.0, 200.0);
        body.integrate(InputFrame::right(), &physics, 10.0, false);
        assert!(body.position().is_finite());
        assert!(body.position().y > 200.0 + 0.5 * 100.0 * 0.5);

        let mut body = body_at(300.0, 200.0);
        body.integrate(InputFrame::right(), &physics, -0.5, false);
        assert!(body.position().is_finite());
    }

    proptest! {
        #[test]
        fn prop_neutral_input_zeroes_horizontal_velocity(
            vx in -1000.0f64..1000.0,
            vy in -1000.0f64..1000.0,
            dt in 0.0f64..0.1,
            jump in any::<bool>(),
            grounded in any::<bool>(),
        ) {
            let physics = PhysicsConfig::default();
            let mut body = body_at(300.0, 200.0);
            body.set_velocity(Vec2::new(vx, vy));

            body.integrate(InputFrame::IDLE.with_jump(jump), &physics, dt, grounded);

            prop_assert_eq!(body.velocity().x, 0.0);
        }

        #[test]
        fn prop_box_tracks_position(
            x in -2000.0f64..2000.0,
            y in -2000.0f64..2000.0,
            left in any::<bool>(),
            right in any::<bool>(),
            dt in 0.0f64..0.1,
        ) {
            let physics = PhysicsConfig::default();
            let mut body = body_at(x, y);
            body.integrate(InputFrame::from_keys(left, right, false), &physics, dt, false);
            let expected = Rect::anchored(Anchor::MidBottom, body.position(), Vec2::new(20.0, 40.0));
            prop_assert_eq!(body.bounding_box(), expected);
        }
    }
}
