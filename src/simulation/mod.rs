//! Simulation rules: percepts, action resolution, scoring

pub mod actions;
pub mod perception;
pub mod scoring;

pub use actions::{resolve, Action, ActionOutcome, GameEvent, PerceptUpdate, Resolution};
pub use perception::{compute_percepts, Percept, PerceptSet};
pub use scoring::{DeathCause, Ending, ScoreTracker, SessionStatus};
