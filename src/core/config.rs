//! Game configuration with documented constants
//!
//! All tunable numbers are collected here with explanations of their purpose.
//! Defaults reproduce the classic rules; a TOML file can override any field.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};

/// Pits per cave. The rules fix this; the config field exists so a TOML file
/// that disagrees fails loudly instead of being ignored.
pub const PIT_COUNT: usize = 2;

/// Largest magnitude any score delta may have
///
/// Keeps a single action far from `i32` limits; the tracker additionally
/// saturates so a long session can never overflow.
pub const MAX_SCORE_MAGNITUDE: i32 = 1_000_000;

/// Score deltas applied by the score tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Cost of a quarter turn
    pub turn: i32,

    /// Cost of a move attempt, charged whether the agent moves or bumps
    pub move_forward: i32,

    /// Cost of a grab attempt, charged even on an empty cell
    pub grab: i32,

    /// Cost of firing the single arrow. Not charged when no arrow is left.
    pub shoot: i32,

    /// Penalty for entering a pit or the live beast's cell
    pub death: i32,

    /// Reward for reaching the start cell while holding the treasure
    pub escape: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            turn: -1,
            move_forward: -1,
            grab: -1,
            shoot: -10,
            death: -1000,
            escape: 1000,
        }
    }
}

/// Configuration for world generation and scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === PLACEMENT ===
    /// Number of pits placed per session. Must equal [`PIT_COUNT`].
    pub pit_count: usize,

    /// Rejection-sampling attempts allowed per placed item
    ///
    /// With the default layout 4 of 16 cells are reserved, so even the last
    /// item is accepted with probability 12/16 per draw. 10 000 attempts make
    /// exhaustion practically impossible while still bounding the loop.
    pub placement_retry_limit: u32,

    /// Seed for world generation
    ///
    /// `None` draws fresh entropy for every generator. `Some` makes the
    /// sequence of generated worlds reproducible.
    pub seed: Option<u64>,

    // === SCORING ===
    pub scoring: ScoringConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pit_count: PIT_COUNT,
            placement_retry_limit: 10_000,
            seed: None,
            scoring: ScoringConfig::default(),
        }
    }
}

impl GameConfig {
    /// Default config with a fixed generation seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.pit_count != PIT_COUNT {
            return Err(GameError::InvalidConfiguration(format!(
                "pit_count must be {}, got {}",
                PIT_COUNT, self.pit_count
            )));
        }

        if self.placement_retry_limit == 0 {
            return Err(GameError::InvalidConfiguration(
                "placement_retry_limit must be at least 1".into(),
            ));
        }

        let s = &self.scoring;
        let deltas = [
            ("turn", s.turn),
            ("move_forward", s.move_forward),
            ("grab", s.grab),
            ("shoot", s.shoot),
            ("death", s.death),
            ("escape", s.escape),
        ];
        for (name, value) in deltas {
            if value.checked_abs().map_or(true, |v| v > MAX_SCORE_MAGNITUDE) {
                return Err(GameError::InvalidConfiguration(format!(
                    "scoring.{} ({}) exceeds +/-{}",
                    name, value, MAX_SCORE_MAGNITUDE
                )));
            }
        }
        if s.turn > 0 || s.move_forward > 0 || s.grab > 0 || s.shoot > 0 {
            return Err(GameError::InvalidConfiguration(
                "action costs must not reward the agent".into(),
            ));
        }
        if s.death >= 0 || s.escape <= 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "death ({}) must be negative and escape ({}) positive",
                s.death, s.escape
            )));
        }

        Ok(())
    }

    /// Parse a TOML document; missing fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}
