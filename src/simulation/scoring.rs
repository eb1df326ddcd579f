//! Score and termination tracking
//!
//! Session status is a three-state machine. The only transitions are
//! `InProgress -> Won` on escape and `InProgress -> Lost` on death; both
//! targets are terminal. Once terminal the tracker refuses every score change.

use serde::{Deserialize, Serialize};

use crate::core::config::ScoringConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    Beast,
    Pit,
}

/// What ended (or would end) a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ending {
    Escaped,
    Died(DeathCause),
}

impl SessionStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }

    pub fn accepts_actions(self) -> bool {
        !self.is_over()
    }

    /// Transition table; `None` means the ending is not accepted from here
    pub fn transition(self, ending: Ending) -> Option<SessionStatus> {
        match (self, ending) {
            (SessionStatus::InProgress, Ending::Escaped) => Some(SessionStatus::Won),
            (SessionStatus::InProgress, Ending::Died(_)) => Some(SessionStatus::Lost),
            (SessionStatus::Won | SessionStatus::Lost, _) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoreTracker {
    scoring: ScoringConfig,
    score: i32,
    status: SessionStatus,
    death_cause: Option<DeathCause>,
}

impl ScoreTracker {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            scoring,
            score: 0,
            status: SessionStatus::InProgress,
            death_cause: None,
        }
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death_cause
    }

    /// Applies an action cost; ignored once the session is over. Saturates at
    /// the `i32` bounds.
    pub fn charge(&mut self, delta: i32) -> bool {
        if self.status.is_over() {
            return false;
        }
        self.score = self.score.saturating_add(delta);
        true
    }

    /// Applies the ending's score delta and moves to the terminal status
    pub fn finish(&mut self, ending: Ending) -> Option<SessionStatus> {
        let next = self.status.transition(ending)?;
        let delta = match ending {
            Ending::Escaped => self.scoring.escape,
            Ending::Died(_) => self.scoring.death,
        };
        self.score = self.score.saturating_add(delta);
        if let Ending::Died(cause) = ending {
            self.death_cause = Some(cause);
        }
        self.status = next;
        Some(next)
    }
}
