//! Rendering-collaborator contract: view events and state snapshots.

pub mod events;
pub mod snapshot;

pub use events::ViewEvent;
pub use snapshot::{GameView, ParticipantView};
