//! Frame Stepper
//!
//! Owns the whole scene and advances it one frame at a time. Per step:
//!
//! ```text
//! input ─► integrate body ─► resolve grounding ─► edge stop
//!       ─► camera update ─► clamp to screen ─► overlay capture
//! ```
//!
//! The stepper never reads a clock: `dt` is whatever the host measured (or
//! a test injected). Given the same config and the same `(input, dt)`
//! sequence, two worlds stay bit-identical.

use crate::core::hash::{compute_state_hash, StateHash};
use crate::core::rect::Rect;
use crate::core::vec2::Vec2;
use crate::game::body::KinematicBody;
use crate::game::camera::Camera;
use crate::game::collision::{is_grounded, resolve_grounding};
use crate::game::config::{ConfigError, WorldConfig};
use crate::game::entity::{DrawCommand, Entity, EntityHandle};
use crate::game::events::StepEvent;
use crate::game::input::{InputFrame, InputRecording};
use crate::game::platform::Platform;
use crate::game::snapshot::DebugSnapshot;

/// Result of a step.
#[derive(Debug, Default)]
pub struct StepResult {
    /// Events generated this step
    pub events: Vec<StepEvent>,
    /// Whether the body ended the step on a platform
    pub grounded: bool,
}

/// The simulated scene: one body, static platforms, a camera.
#[derive(Clone, Debug)]
pub struct World {
    config: WorldConfig,
    screen: Rect,
    body: KinematicBody,
    platforms: Vec<Platform>,
    camera: Camera,
    entities: Vec<Entity>,
    grounded: bool,
    step_count: u64,
    last_dt: f64,
    elapsed: f64,
    snapshot: Option<DebugSnapshot>,
}

impl World {
    /// Build the scene described by `config`, with the debug overlay enabled.
    ///
    /// The config is trusted; use [`World::try_new`] for untrusted input.
    pub fn new(config: WorldConfig) -> Self {
        let platforms: Vec<Platform> = config.platforms.iter().map(Platform::from).collect();

        let mut entities = Vec::with_capacity(platforms.len() + 2);
        entities.push(Entity::Player);
        entities.extend((0..platforms.len()).map(Entity::Platform));
        entities.push(Entity::Overlay);

        tracing::debug!(
            platforms = platforms.len(),
            screen = %config.screen_size,
            virtual_size = %config.virtual_size,
            "world created"
        );

        Self {
            screen: config.screen_rect(),
            body: KinematicBody::from_config(&config.player),
            camera: Camera::new(&config),
            platforms,
            entities,
            grounded: false,
            step_count: 0,
            last_dt: 0.0,
            elapsed: 0.0,
            snapshot: None,
            config,
        }
    }

    /// Validate `config`, then build the scene.
    pub fn try_new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Enable or disable the debug overlay entity.
    pub fn with_overlay(mut self, enabled: bool) -> Self {
        self.set_overlay(enabled);
        self
    }

    /// Enable or disable the debug overlay entity in place.
    ///
    /// The overlay always stays last so it sees the finished step.
    pub fn set_overlay(&mut self, enabled: bool) {
        self.entities.retain(|e| *e != Entity::Overlay);
        if enabled {
            self.entities.push(Entity::Overlay);
        } else {
            self.snapshot = None;
        }
    }

    /// Whether the debug overlay entity is in the scene.
    pub fn overlay_enabled(&self) -> bool {
        self.entities.contains(&Entity::Overlay)
    }

    /// Run one simulation step.
    ///
    /// Entities update in list order: the player first, then the static
    /// platforms, then the overlay, which sees the finished step.
    pub fn step(&mut self, input: InputFrame, dt: f64) -> StepResult {
        let mut result = StepResult::default();

        self.step_count += 1;
        self.last_dt = dt;
        self.elapsed += dt;

        for index in 0..self.entities.len() {
            let entity = self.entities[index];
            entity.update(self, input, dt, &mut result);
        }

        result.grounded = self.grounded;

        #[cfg(feature = "debug-tracing")]
        for event in &result.events {
            tracing::trace!(step = self.step_count, %event, "step event");
        }

        result
    }

    /// Player half of the step: physics, collision, camera, clamp.
    pub(crate) fn step_player(&mut self, input: InputFrame, dt: f64, result: &mut StepResult) {
        let platform_rects = self.platform_rects();

        // Jump gating uses contact from before integration
        let standing = is_grounded(&self.body, &platform_rects);
        if self.body.integrate(input, &self.config.physics, dt, standing) {
            result.events.push(StepEvent::Jumped);
        }

        let landed_on = resolve_grounding(&mut self.body, &platform_rects);
        match (self.grounded, landed_on) {
            (false, Some(platform)) => result.events.push(StepEvent::Landed { platform }),
            (true, None) => result.events.push(StepEvent::LeftGround),
            _ => {}
        }
        self.grounded = landed_on.is_some();

        if self.body.bounding_box().right() >= self.screen.right() {
            self.body.clear_horizontal_acceleration();
        }

        let delta = self.camera.track(&self.body);
        if delta != 0.0 {
            result.events.push(StepEvent::Scrolled { delta });
        }

        self.clamp_to_bounds();
    }

    /// Overlay half of the step.
    pub(crate) fn capture_overlay(&mut self) {
        self.snapshot = Some(DebugSnapshot::capture(self, self.elapsed));
    }

    /// Keep the player's box on screen, re-deriving `position` from the
    /// clamped box so the two never disagree. Returns whether it clamped.
    pub fn clamp_to_bounds(&mut self) -> bool {
        self.body.clamp_within(&self.screen)
    }

    /// Screen-space boxes of every platform, in registration order.
    pub fn platform_rects(&self) -> Vec<Rect> {
        self.platforms.iter().map(|p| self.camera.project(p)).collect()
    }

    /// Screen-space box of one platform.
    pub fn platform_rect(&self, index: usize) -> Option<Rect> {
        self.platforms.get(index).map(|p| self.camera.project(p))
    }

    /// Draw commands for every entity, in draw order.
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        self.entities
            .iter()
            .enumerate()
            .map(|(index, entity)| entity.draw(EntityHandle(index), self))
            .collect()
    }

    /// Deterministic hash of the dynamic state.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.step_count, |hasher| {
            hasher.update_vec2(self.body.position());
            hasher.update_vec2(self.body.velocity());
            hasher.update_vec2(self.body.acceleration());
            hasher.update_vec2(self.camera.position());
            hasher.update_f64(self.camera.scroll_delta());
            hasher.update_bool(self.grounded);
        })
    }

    /// Configuration this world was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Viewport rectangle.
    pub fn screen(&self) -> Rect {
        self.screen
    }

    /// Player body.
    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    /// Mutable player body, for placing it in tests and tools.
    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    /// Platforms in registration order.
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Scroll camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Entity list in update/draw order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Whether the body ended the last step on a platform.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Number of steps run.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// `dt` of the last step.
    pub fn last_dt(&self) -> f64 {
        self.last_dt
    }

    /// Sum of every `dt` so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Overlay snapshot from the last step, if the overlay is enabled.
    pub fn snapshot(&self) -> Option<&DebugSnapshot> {
        self.snapshot.as_ref()
    }
}

/// Replay a recording from a fresh world.
///
/// Returns the final world and every event in order.
pub fn replay(config: WorldConfig, recording: &InputRecording) -> (World, Vec<StepEvent>) {
    let mut world = World::new(config);
    let mut all_events = Vec::new();

    for step in recording.steps() {
        let result = world.step(step.input, step.dt);
        all_events.extend(result.events);
    }

    (world, all_events)
}

/// Replay a recording and collect `(position, velocity)` after every step.
pub fn replay_trajectory(config: WorldConfig, recording: &InputRecording) -> Vec<(Vec2, Vec2)> {
    let mut world = World::new(config);
    recording
        .steps()
        .iter()
        .map(|step| {
            world.step(step.input, step.dt);
            (world.body().position(), world.body().velocity())
        })
        .collect()
}
