//! Input Capture and Recording
//!
//! Per-step player input plus a recording of `(input, dt)` pairs that can be
//! saved, loaded and replayed to reproduce a run exactly.

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use thiserror::Error;

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Horizontal intent for one step. Left and right are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizontal {
    /// No direction held
    #[default]
    Neutral,
    /// Move left
    Left,
    /// Move right
    Right,
}

impl Horizontal {
    /// Resolve raw key state. Right wins when both are held.
    pub fn from_keys(left: bool, right: bool) -> Self {
        if right {
            Horizontal::Right
        } else if left {
            Horizontal::Left
        } else {
            Horizontal::Neutral
        }
    }
}

/// Input state for a single step.
///
/// Packed into one byte so recordings stay small.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputFrame {
    /// Action flags (packed bits):
    /// - Bit 0: Left held
    /// - Bit 1: Right held
    /// - Bit 2: Jump held
    /// - Bit 3-7: Reserved
    flags: u8,
}

impl InputFrame {
    /// Left flag bit
    pub const FLAG_LEFT: u8 = 0x01;

    /// Right flag bit
    pub const FLAG_RIGHT: u8 = 0x02;

    /// Jump flag bit
    pub const FLAG_JUMP: u8 = 0x04;

    /// Idle input (nothing held).
    pub const IDLE: Self = Self { flags: 0 };

    /// Create input from a direction and the jump key.
    pub const fn new(horizontal: Horizontal, jump: bool) -> Self {
        let mut flags = match horizontal {
            Horizontal::Neutral => 0,
            Horizontal::Left => Self::FLAG_LEFT,
            Horizontal::Right => Self::FLAG_RIGHT,
        };
        if jump {
            flags |= Self::FLAG_JUMP;
        }
        Self { flags }
    }

    /// Create input from raw key state; right wins over left.
    pub fn from_keys(left: bool, right: bool, jump: bool) -> Self {
        Self::new(Horizontal::from_keys(left, right), jump)
    }

    /// Holding left only.
    pub const fn left() -> Self {
        Self::new(Horizontal::Left, false)
    }

    /// Holding right only.
    pub const fn right() -> Self {
        Self::new(Horizontal::Right, false)
    }

    /// Holding jump only.
    pub const fn jump() -> Self {
        Self::new(Horizontal::Neutral, true)
    }

    /// Same input with the jump flag set or cleared.
    pub const fn with_jump(self, pressed: bool) -> Self {
        let flags = if pressed {
            self.flags | Self::FLAG_JUMP
        } else {
            self.flags & !Self::FLAG_JUMP
        };
        Self { flags }
    }

    /// Horizontal intent.
    #[inline]
    pub fn horizontal(&self) -> Horizontal {
        if self.flags & Self::FLAG_RIGHT != 0 {
            Horizontal::Right
        } else if self.flags & Self::FLAG_LEFT != 0 {
            Horizontal::Left
        } else {
            Horizontal::Neutral
        }
    }

    /// Check if jump is held this step.
    #[inline]
    pub fn jump_pressed(&self) -> bool {
        self.flags & Self::FLAG_JUMP != 0
    }
}

// =============================================================================
// RECORDING
// =============================================================================

/// Errors raised while saving or loading a recording.
#[derive(Debug, Error)]
pub enum RecordingError {
    /// File could not be read or written
    #[error("recording I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// File is not a valid recording
    #[error("recording JSON invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// One recorded step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedStep {
    /// Input held during the step
    pub input: InputFrame,
    /// Frame delta in seconds
    pub dt: f64,
}

/// Complete `(input, dt)` recording of one session.
///
/// Used for:
/// - Replay playback
/// - Determinism checks
/// - Regression fixtures
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputRecording {
    steps: Vec<RecordedStep>,
}

impl InputRecording {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self {
            steps: Vec::with_capacity(600), // ~10 seconds at 60 Hz
        }
    }

    /// Build a recording from an iterator of `(input, dt)` pairs.
    pub fn from_steps<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = (InputFrame, f64)>,
    {
        Self {
            steps: steps
                .into_iter()
                .map(|(input, dt)| RecordedStep { input, dt })
                .collect(),
        }
    }

    /// Append one step.
    pub fn record(&mut self, input: InputFrame, dt: f64) {
        self.steps.push(RecordedStep { input, dt });
    }

    /// All recorded steps in order.
    pub fn steps(&self) -> &[RecordedStep] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all recorded `dt`.
    pub fn duration(&self) -> f64 {
        self.steps.iter().map(|s| s.dt).sum()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, RecordingError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, RecordingError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RecordingError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordingError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

// =============================================================================
// TESTS
// =============================================================================
