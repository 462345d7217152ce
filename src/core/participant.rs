//! Per-participant mutable state.
//!
//! A `Participant` is a plain data holder: score, the target/limb pair
//! assigned for the current cycle, the mirrored countdown value, and the
//! per-cycle selection flags. The controller owns every participant and is
//! the only writer; the setters here perform no validation because the enum
//! types already rule out invalid assignments.

use serde::{Deserialize, Serialize};

use super::action::{ActionPair, Limb, Target};

/// One player in the game.
///
/// Selection state resets at the start of every cycle:
/// - `has_selected`: this participant has registered a guess this cycle.
/// - `selected`: this participant is the cycle's revealed actor.
/// - `selected_action`: the action the actor was told to perform, which may
///   differ from the actor's own `target`/`limb` assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    points: i32,
    target: Target,
    limb: Limb,
    remaining_time: u32,
    has_selected: bool,
    selected: bool,
    selected_action: Option<ActionPair>,
}

impl Participant {
    /// Create a participant with zero points and cleared selection state.
    ///
    /// The initial assignment is a placeholder; the controller overwrites it
    /// in the first cycle-setup pass before the game is observable.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 0,
            target: Target::A,
            limb: Limb::Hand,
            remaining_time: 0,
            has_selected: false,
            selected: false,
            selected_action: None,
        }
    }

    /// Stable unique identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current score. May go negative.
    #[must_use]
    pub fn points(&self) -> i32 {
        self.points
    }

    /// This cycle's assigned target.
    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    /// This cycle's assigned limb.
    #[must_use]
    pub fn limb(&self) -> Limb {
        self.limb
    }

    /// The assigned pair as one value.
    #[must_use]
    pub fn assignment(&self) -> ActionPair {
        ActionPair::new(self.target, self.limb)
    }

    /// Countdown value mirrored at the last cycle setup, in seconds.
    #[must_use]
    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    /// Whether this participant has guessed this cycle.
    #[must_use]
    pub fn has_selected(&self) -> bool {
        self.has_selected
    }

    /// Whether this participant is the cycle's revealed actor.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The action the actor was told to perform, if revealed.
    #[must_use]
    pub fn selected_action(&self) -> Option<ActionPair> {
        self.selected_action
    }

    /// Overwrite the assigned target.
    pub fn set_target(&mut self, target: Target) {
        self.target = target;
    }

    /// Overwrite the assigned limb.
    pub fn set_limb(&mut self, limb: Limb) {
        self.limb = limb;
    }

    /// Mirror the controller's countdown.
    pub fn set_remaining_time(&mut self, seconds: u32) {
        self.remaining_time = seconds;
    }

    /// Apply a guess outcome: +1 for correct, -1 for incorrect.
    pub fn update_points(&mut self, correct: bool) {
        if correct {
            self.points += 1;
        } else {
            self.points -= 1;
        }
    }

    /// Record that this participant has guessed this cycle.
    pub fn mark_guessed(&mut self) {
        self.has_selected = true;
    }

    /// Reveal this participant as the cycle's actor with their action.
    pub fn mark_selected(&mut self, action: ActionPair) {
        self.selected = true;
        self.selected_action = Some(action);
    }

    /// Clear all per-cycle selection state.
    pub fn reset_selection(&mut self) {
        self.has_selected = false;
        self.selected = false;
        self.selected_action = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_participant() {
        let p = Participant::new("User1");
        assert_eq!(p.name(), "User1");
        assert_eq!(p.points(), 0);
        assert!(!p.has_selected());
        assert!(!p.is_selected());
        assert_eq!(p.selected_action(), None);
    }

    #[test]
    fn test_update_points_signed_sum() {
        let mut p = Participant::new("User1");
        let outcomes = [true, false, false, true, false];
        for &o in &outcomes {
            p.update_points(o);
        }
        let expected: i32 = outcomes.iter().map(|&o| if o { 1 } else { -1 }).sum();
        assert_eq!(p.points(), expected);
        assert_eq!(p.points(), -1);
    }

    #[test]
    fn test_points_can_go_negative() {
        let mut p = Participant::new("User1");
        p.update_points(false);
        p.update_points(false);
        assert_eq!(p.points(), -2);
    }

    #[test]
    fn test_reset_selection() {
        let mut p = Participant::new("User1");
        p.mark_guessed();
        p.mark_selected(ActionPair::new(Target::B, Limb::Leg));

        p.reset_selection();

        assert!(!p.has_selected());
        assert!(!p.is_selected());
        assert_eq!(p.selected_action(), None);
    }

    #[test]
    fn test_reset_preserves_points() {
        let mut p = Participant::new("User1");
        p.update_points(true);
        p.reset_selection();
        assert_eq!(p.points(), 1);
    }

    #[test]
    fn test_assignment_pair() {
        let mut p = Participant::new("User1");
        p.set_target(Target::B);
        p.set_limb(Limb::Leg);
        assert_eq!(p.assignment(), ActionPair::new(Target::B, Limb::Leg));
    }

    #[test]
    fn test_serialization() {
        let mut p = Participant::new("User2");
        p.update_points(true);
        p.mark_selected(ActionPair::new(Target::A, Limb::Hand));

        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Participant = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
