//! Core domain types: actions, participants, configuration, RNG.

pub mod action;
pub mod config;
pub mod participant;
pub mod rng;

pub use action::{ActionOutcome, ActionPair, Limb, RejectReason, Target};
pub use config::{ConfigError, GameConfig};
pub use participant::Participant;
pub use rng::GameRng;
