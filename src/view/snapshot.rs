//! Render-state snapshots.
//!
//! The rendering collaborator never reaches into the controller's state.
//! It asks for a `GameView`, a plain serializable copy of everything a
//! frame needs: every participant's visible fields, whether an actor is
//! currently revealed (to disable the other participants' inputs), and the
//! countdown.

use serde::{Deserialize, Serialize};

use crate::core::{ActionPair, Limb, Participant, Target};

/// Visible state of one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantView {
    pub name: String,
    pub points: i32,
    pub target: Target,
    pub limb: Limb,
    pub remaining_time: u32,
    pub has_selected: bool,
    pub selected: bool,
    pub selected_action: Option<ActionPair>,
}

impl ParticipantView {
    /// Snapshot a participant.
    #[must_use]
    pub fn of(participant: &Participant) -> Self {
        Self {
            name: participant.name().to_string(),
            points: participant.points(),
            target: participant.target(),
            limb: participant.limb(),
            remaining_time: participant.remaining_time(),
            has_selected: participant.has_selected(),
            selected: participant.is_selected(),
            selected_action: participant.selected_action(),
        }
    }
}

/// Complete render state for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Participants in display order.
    pub participants: Vec<ParticipantView>,
    /// True if any participant is the revealed actor this cycle.
    pub any_selected: bool,
    /// Seconds left on the game countdown.
    pub remaining_time: u32,
}

impl GameView {
    /// Snapshot a participant list and countdown.
    #[must_use]
    pub fn of(participants: &[Participant], remaining_time: u32) -> Self {
        Self {
            participants: participants.iter().map(ParticipantView::of).collect(),
            any_selected: participants.iter().any(Participant::is_selected),
            remaining_time,
        }
    }
}
