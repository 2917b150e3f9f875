//! Core primitives.
//!
//! Geometry and hashing shared by every simulation module. Nothing in here
//! reads a clock or holds global state.

pub mod vec2;
pub mod rect;
pub mod hash;

// Re-export core types
pub use vec2::Vec2;
pub use rect::{Anchor, Rect};
pub use hash::{StateHash, StateHasher, compute_state_hash, hash_trajectory};
