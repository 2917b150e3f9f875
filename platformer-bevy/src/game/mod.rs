//! Game module - runs the platformer simulation inside Bevy
//!
//! The simulation owns all game state. Bevy only samples the keyboard,
//! measures the frame delta, and mirrors the draw list into sprites.

use bevy::prelude::*;

use platformer::game::config::Rgba;
use platformer::game::StepEvent;
use platformer::{ConfigError, InputFrame, World, WorldConfig};

pub mod components;
pub mod player;
pub mod visuals;

pub use components::*;
pub use player::*;
pub use visuals::*;

// ============================================================================
// GAME PLUGIN
// ============================================================================

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<PendingInput>()

            // Scene setup
            .add_systems(Startup, spawn_scene)

            // One simulation step per rendered frame, using the measured delta
            .add_systems(Update, (
                read_keyboard,
                step_simulation,
                sync_sprites,
            ).chain())
            .add_systems(Update, exit_on_escape);
    }
}

// ============================================================================
// RESOURCES
// ============================================================================

/// The simulated world plus host bookkeeping
#[derive(Resource)]
pub struct Simulation {
    pub world: World,
    /// Set once the first frame has been stepped
    started: bool,
}

impl Simulation {
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            world: World::try_new(config)?,
            started: false,
        })
    }
}

/// Input sampled this frame, consumed by [`step_simulation`]
#[derive(Resource, Default)]
pub struct PendingInput(pub InputFrame);

// ============================================================================
// SYSTEMS
// ============================================================================

/// Advance the simulation by this frame's delta.
///
/// The first frame has nothing to measure against and steps with zero.
pub fn step_simulation(
    time: Res<Time>,
    pending: Res<PendingInput>,
    mut sim: ResMut<Simulation>,
) {
    let dt = if sim.started { time.delta_secs_f64() } else { 0.0 };
    sim.started = true;

    let result = sim.world.step(pending.0, dt);
    for event in &result.events {
        match event {
            StepEvent::Scrolled { .. } => trace!("Step {}: {}", sim.world.step_count(), event),
            _ => debug!("Step {}: {}", sim.world.step_count(), event),
        }
    }
}

/// Convert a simulation palette entry to a Bevy colour
pub fn palette_color(rgba: Rgba) -> Color {
    Color::srgba_u8(rgba[0], rgba[1], rgba[2], rgba[3])
}
