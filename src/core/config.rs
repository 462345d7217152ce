//! Game configuration and validation.
//!
//! All timing knobs are whole seconds on the virtual clock. The defaults
//! reproduce the standard game: 10-second cycles, a 5-second actor reveal,
//! a 3-second alert flash, and a 10-second end-of-game report window.
//!
//! Validation happens once, at `GameConfig::validate` (called by the
//! controller's constructor). Two degenerate inputs are rejected outright
//! instead of producing undefined behavior: an empty
//! participant list (winner computation over an empty set) and a reveal
//! delay that does not fit inside a cycle (the reveal would fire after the
//! next cycle had already reset selection state).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cycle length in seconds.
pub const DEFAULT_CYCLE_LENGTH: u32 = 10;
/// Default actor-reveal delay after cycle start, in seconds.
pub const DEFAULT_REVEAL_DELAY: u32 = 5;
/// Default alert display window, in seconds.
pub const DEFAULT_ALERT_DURATION: u32 = 3;
/// Default end-of-game report window, in seconds.
pub const DEFAULT_REPORT_DURATION: u32 = 10;
/// Default probability that the actor's assigned action equals their own
/// target/limb pair.
pub const DEFAULT_TRIVIAL_PROBABILITY: f64 = 0.6;

/// Rejected configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("at least one participant is required")]
    NoParticipants,
    #[error("total duration must be positive")]
    ZeroDuration,
    #[error("cycle length must be positive")]
    ZeroCycleLength,
    #[error("reveal delay ({reveal_delay}s) must be shorter than the cycle length ({cycle_length}s)")]
    RevealOutsideCycle { reveal_delay: u32, cycle_length: u32 },
    #[error("trivial-action probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of participants (at least 1).
    pub participant_count: usize,
    /// Total game duration in seconds.
    pub total_duration: u32,
    /// Cycle cadence in seconds.
    pub cycle_length: u32,
    /// Seconds after cycle start at which the actor is revealed.
    pub reveal_delay: u32,
    /// Seconds the cycle-start alert stays visible.
    pub alert_duration: u32,
    /// Seconds the end-of-game report stays visible.
    pub report_duration: u32,
    /// Probability that the actor's action is their own assignment.
    pub trivial_probability: f64,
}

impl GameConfig {
    /// Create a configuration with the standard timing constants.
    #[must_use]
    pub fn new(participant_count: usize, total_duration: u32) -> Self {
        Self {
            participant_count,
            total_duration,
            cycle_length: DEFAULT_CYCLE_LENGTH,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            alert_duration: DEFAULT_ALERT_DURATION,
            report_duration: DEFAULT_REPORT_DURATION,
            trivial_probability: DEFAULT_TRIVIAL_PROBABILITY,
        }
    }

    /// Override the cycle length.
    #[must_use]
    pub fn with_cycle_length(mut self, seconds: u32) -> Self {
        self.cycle_length = seconds;
        self
    }

    /// Override the actor-reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, seconds: u32) -> Self {
        self.reveal_delay = seconds;
        self
    }

    /// Override the trivial-action probability.
    #[must_use]
    pub fn with_trivial_probability(mut self, probability: f64) -> Self {
        self.trivial_probability = probability;
        self
    }

    /// Check the configuration for degenerate values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.participant_count == 0 {
            return Err(ConfigError::NoParticipants);
        }
        if self.total_duration == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.cycle_length == 0 {
            return Err(ConfigError::ZeroCycleLength);
        }
        if self.reveal_delay >= self.cycle_length {
            return Err(ConfigError::RevealOutsideCycle {
                reveal_delay: self.reveal_delay,
                cycle_length: self.cycle_length,
            });
        }
        if !(0.0..=1.0).contains(&self.trivial_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.trivial_probability));
        }
        Ok(())
    }
}
