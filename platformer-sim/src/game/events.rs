//! Step Events
//!
//! Notable transitions reported by [`crate::game::stepper::World::step`].
//! Screen-edge clamping is routine and is not reported.

use std::fmt;

use serde::{Serialize, Deserialize};

/// Something that happened during one step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StepEvent {
    /// A grounded jump was applied
    Jumped,
    /// The body touched down after being airborne
    Landed {
        /// Registration index of the platform landed on
        platform: usize,
    },
    /// The body lost contact with every platform
    LeftGround,
    /// The camera shifted horizontally
    Scrolled {
        /// Signed camera shift
        delta: f64,
    },
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepEvent::Jumped => write!(f, "jumped"),
            StepEvent::Landed { platform } => write!(f, "landed on platform {}", platform),
            StepEvent::LeftGround => write!(f, "left ground"),
            StepEvent::Scrolled { delta } => write!(f, "scrolled {:+}", delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        assert_eq!(StepEvent::Landed { platform: 1 }.to_string(), "landed on platform 1");
        assert_eq!(StepEvent::Scrolled { delta: -10.0 }.to_string(), "scrolled -10");
        assert_eq!(StepEvent::Scrolled { delta: 10.0 }.to_string(), "scrolled +10");
    }
}
