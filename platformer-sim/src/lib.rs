//! # Platformer
//!
//! Side-scrolling platformer simulation: one gravity-bound body, static
//! platforms and an edge-triggered scroll camera, stepped with a host
//! supplied frame delta.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      PLATFORMER SIM                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Geometry and hashing primitives          │
//! │  ├── vec2.rs      - 2D f64 vector                            │
//! │  ├── rect.rs      - Axis-aligned boxes, anchors, clamping    │
//! │  └── hash.rs      - State hashing for replay checks          │
//! │                                                              │
//! │  game/            - Scene logic                              │
//! │  ├── config.rs    - Constants, layout, palette               │
//! │  ├── input.rs     - Input flags and recordings               │
//! │  ├── body.rs      - Kinematic integration                    │
//! │  ├── platform.rs  - Static platforms                         │
//! │  ├── collision.rs - Grounding and landing                    │
//! │  ├── camera.rs    - Scroll camera                            │
//! │  ├── entity.rs    - Entity list and draw commands            │
//! │  ├── snapshot.rs  - Debug overlay values                     │
//! │  └── stepper.rs   - Per-frame world step                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! The stepper never reads a clock or a random source. Given the same
//! [`WorldConfig`] and the same `(input, dt)` sequence, two runs produce
//! bit-identical positions and velocities on the same platform. Rendering
//! hosts only read the world through [`World::draw_list`] and
//! [`World::snapshot`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use core::rect::{Anchor, Rect};
pub use core::vec2::Vec2;
pub use core::hash::StateHash;
pub use game::config::{ConfigError, WorldConfig};
pub use game::input::{InputFrame, InputRecording};
pub use game::stepper::{StepResult, World};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target frame rate of the default configuration (Hz)
pub const TARGET_FPS: u32 = 60;
