//! Deterministic timing: a virtual clock with one-shot and repeating timers.

pub mod scheduler;

pub use scheduler::{Fired, Scheduler, TimerId};
