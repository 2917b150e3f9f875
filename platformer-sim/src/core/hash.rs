//! State Hashing for Verification
//!
//! Digests of simulation state, used to check that two runs fed the same
//! `(input, dt)` sequence end up bit-identical:
//! - Replay validation
//! - Regression pinning of whole trajectories

use sha2::{Sha256, Digest};
use super::vec2::Vec2;

/// Hash output type (256 bits / 32 bytes)
pub type StateHash = [u8; 32];

/// Deterministic hasher for simulation state.
///
/// Wraps SHA-256 with helpers for the float types of the simulation.
/// Floats are hashed by bit pattern, so `0.0` and `-0.0` differ.
pub struct StateHasher {
    hasher: Sha256,
}

impl StateHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for world state.
    pub fn for_world_state() -> Self {
        Self::new(b"PLATFORMER_STATE_V1")
    }

    /// Create hasher for a full trajectory.
    pub fn for_trajectory() -> Self {
        Self::new(b"PLATFORMER_TRAJECTORY_V1")
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u64 value (little-endian).
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an f64 bit pattern (little-endian).
    #[inline]
    pub fn update_f64(&mut self, value: f64) {
        self.update_u64(value.to_bits());
    }

    /// Update with a Vec2.
    #[inline]
    pub fn update_vec2(&mut self, value: Vec2) {
        let (x, y) = value.to_bits();
        self.update_u64(x);
        self.update_u64(y);
    }

    /// Update with a boolean.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update_u8(value as u8);
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> StateHash {
        self.hasher.finalize().into()
    }
}

/// Compute a state hash.
///
/// The closure adds state-specific data after the step counter.
pub fn compute_state_hash<F>(step: u64, add_state: F) -> StateHash
where
    F: FnOnce(&mut StateHasher),
{
    let mut hasher = StateHasher::for_world_state();
    hasher.update_u64(step);
    add_state(&mut hasher);
    hasher.finalize()
}

/// Hash a sequence of `(position, velocity)` samples.
pub fn hash_trajectory<I>(samples: I) -> StateHash
where
    I: IntoIterator<Item = (Vec2, Vec2)>,
{
    let mut hasher = StateHasher::for_trajectory();
    let mut count = 0u64;
    for (position, velocity) in samples {
        hasher.update_vec2(position);
        hasher.update_vec2(velocity);
        count += 1;
    }
    hasher.update_u64(count);
    hasher.finalize()
}

// =============================================================================
// TESTS
// =============================================================================
