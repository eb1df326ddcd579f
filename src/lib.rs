//! Beast Cave - grid hazard-search simulation
//!
//! An agent explores a 4x4 cave holding two pits, a beast and a treasure,
//! guided only by stench, breeze and glitter. Presentation front ends drive a
//! [`session::GameSession`] and render the snapshots it returns.

pub mod agent;
pub mod core;
pub mod session;
pub mod simulation;
pub mod world;

pub use crate::core::{GameConfig, GameError, Result};
pub use crate::session::{ActionResult, GameSession, SessionSnapshot};
