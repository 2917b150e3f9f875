//! Game Logic Module
//!
//! Everything that advances or describes the scene. Deterministic for a
//! given `(input, dt)` sequence.
//!
//! ## Module Structure
//!
//! - `config`: Tunable constants, layout, palette
//! - `input`: Per-step input flags and recordings
//! - `body`: Kinematic integration of the player
//! - `platform`: Static platforms
//! - `collision`: Overlap tests and landing
//! - `camera`: Edge-triggered horizontal scroll
//! - `entity`: Ordered scene entities and draw commands
//! - `snapshot`: Debug overlay values
//! - `stepper`: The per-frame world step
//! - `events`: Step events for logging and replay checks

pub mod config;
pub mod input;
pub mod body;
pub mod platform;
pub mod collision;
pub mod camera;
pub mod entity;
pub mod snapshot;
pub mod stepper;
pub mod events;

// Re-export key types
pub use body::KinematicBody;
pub use camera::{Camera, ScrollState};
pub use config::{ConfigError, WorldConfig, ScrollRule};
pub use entity::{DrawCommand, Entity, EntityHandle};
pub use events::StepEvent;
pub use input::{Horizontal, InputFrame, InputRecording, RecordingError};
pub use platform::Platform;
pub use snapshot::DebugSnapshot;
pub use stepper::{replay, replay_trajectory, StepResult, World};
