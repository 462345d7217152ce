//! View events: notifications for the rendering collaborator.
//!
//! The controller appends events to an internal queue as state changes;
//! whatever drives the UI drains the queue after each call into the core
//! and reacts. Events are advisory, they carry no state the renderer
//! cannot also get from a `GameView` snapshot, except the final report.

use serde::{Deserialize, Serialize};

use crate::core::ActionPair;
use crate::game::GameReport;

/// A notification for the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// The countdown has been armed and the game view should be shown.
    GameStarted,
    /// A new cycle began; show the cycle-start alert.
    AlertShown,
    /// The alert display window elapsed; hide the alert.
    AlertHidden,
    /// New assignments are in place; show the cycle info.
    CycleStarted,
    /// The cycle's actor has been revealed with their assigned action.
    ActorRevealed { name: String, action: ActionPair },
    /// Participant state changed; re-render from a fresh snapshot.
    ParticipantsChanged,
    /// Time ran out; show the end-of-game report.
    GameEnded(GameReport),
    /// The report display window elapsed; hide the report.
    ReportExpired,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Limb, Target};

    #[test]
    fn test_event_serialization() {
        let event = ViewEvent::ActorRevealed {
            name: "User3".to_string(),
            action: ActionPair::new(Target::B, Limb::Hand),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: ViewEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
