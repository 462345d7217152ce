//! # reflex
//!
//! A deterministic core for a timed, round-based party game: every cycle
//! each participant is assigned a random target/limb pair, one participant
//! is secretly chosen to act, and everyone scores by guessing their own
//! assignment back.
//!
//! ## Design Principles
//!
//! 1. **Explicit time**: the game runs on a virtual clock driven by
//!    `Game::advance`. No wall-clock timers, so every run is replayable
//!    and testable.
//!
//! 2. **Explicit ownership**: the controller is a constructed value, not a
//!    global. It exclusively owns and mutates participant state; the only
//!    external mutation path is `Game::handle_action`.
//!
//! 3. **Explicit outcomes**: guesses return `ActionOutcome` instead of
//!    silently no-oping, and degenerate configurations are `ConfigError`s
//!    instead of undefined behavior.
//!
//! ## Modules
//!
//! - `core`: targets, limbs, actions, participants, configuration, RNG
//! - `timing`: virtual-clock timer scheduler
//! - `game`: the round controller and winner reports
//! - `view`: events and snapshots for the rendering collaborator
//!
//! ## Example
//!
//! ```
//! use reflex::{Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::new(4, 60), 42).unwrap();
//! game.start();
//!
//! // One full cycle: alert hides at 3s, actor revealed at 5s, tick at 10s.
//! game.advance(10);
//!
//! for event in game.drain_events() {
//!     // hand events to the rendering layer
//!     let _ = event;
//! }
//! assert_eq!(game.remaining_time(), 50);
//! ```

pub mod core;
pub mod game;
pub mod timing;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    ActionOutcome, ActionPair, ConfigError, GameConfig, GameRng, Limb, Participant, RejectReason,
    Target,
};
pub use crate::game::{Game, GameReport};
pub use crate::timing::{Fired, Scheduler, TimerId};
pub use crate::view::{GameView, ParticipantView, ViewEvent};
