//! Targets, limbs, and the actions built from them.
//!
//! Every cycle each participant is assigned one `(Target, Limb)` pair and
//! must guess it back through the controller. The same pair type doubles as
//! the action the cycle's actor is told to perform.
//!
//! `ActionOutcome` makes the controller's accept/reject decision explicit,
//! so callers can tell an accepted guess from an ignored one without
//! re-querying state.

use serde::{Deserialize, Serialize};

/// One of the two targets a participant can be assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    A,
    B,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::A => write!(f, "A"),
            Target::B => write!(f, "B"),
        }
    }
}

/// The limb a participant acts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Limb {
    Hand,
    Leg,
}

impl std::fmt::Display for Limb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Limb::Hand => write!(f, "H"),
            Limb::Leg => write!(f, "L"),
        }
    }
}

/// A complete target + limb pair.
///
/// Used both as a participant's per-cycle assignment and as the action the
/// cycle's actor is told to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionPair {
    pub target: Target,
    pub limb: Limb,
}

impl ActionPair {
    /// All four possible pairs, in display order.
    pub const ALL: [ActionPair; 4] = [
        ActionPair::new(Target::A, Limb::Hand),
        ActionPair::new(Target::A, Limb::Leg),
        ActionPair::new(Target::B, Limb::Hand),
        ActionPair::new(Target::B, Limb::Leg),
    ];

    /// Create a pair.
    #[must_use]
    pub const fn new(target: Target, limb: Limb) -> Self {
        Self { target, limb }
    }
}

impl std::fmt::Display for ActionPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.target, self.limb)
    }
}

/// Why a guess was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// No participant with the given name exists.
    UnknownParticipant,
    /// The participant already guessed this cycle.
    AlreadySelected,
}

/// Result of submitting a guess to the controller.
///
/// A rejected guess changes no state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The guess was scored. `correct` reports whether it matched the
    /// participant's own assignment.
    Accepted { correct: bool },
    /// The guess was ignored.
    Rejected(RejectReason),
}

impl ActionOutcome {
    /// Check whether the guess was applied.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ActionOutcome::Accepted { .. })
    }
}
