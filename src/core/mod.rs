pub mod config;
pub mod error;
pub mod types;

pub use config::{GameConfig, ScoringConfig};
pub use error::{GameError, Result};
pub use types::{Coord, Orientation, SessionId, TurnDirection};
