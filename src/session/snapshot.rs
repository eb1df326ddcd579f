//! Read-only views handed to the presentation layer

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::core::error::Result;
use crate::core::types::{Coord, Orientation, SessionId};
use crate::simulation::{Action, ActionOutcome, DeathCause, GameEvent, PerceptSet, SessionStatus};
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentView {
    pub position: Coord,
    pub orientation: Orientation,
    /// 1 until the arrow is fired, then 0
    pub arrows: u8,
    pub has_treasure: bool,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        Self {
            position: agent.position,
            orientation: agent.orientation,
            arrows: agent.arrow_count(),
            has_treasure: agent.has_treasure,
        }
    }
}

/// A hidden item, shown only once the session is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Pit,
    Beast { alive: bool },
    Treasure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub coord: Coord,
    pub visited: bool,
    /// The agent stands here
    pub current: bool,
    pub occupant: Option<Occupant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub agent: AgentView,
    pub score: i32,
    pub status: SessionStatus,
    pub death_cause: Option<DeathCause>,
    pub percepts: PerceptSet,
    /// Row-major from `(0, 0)`
    pub cells: Vec<CellView>,
}

impl SessionSnapshot {
    pub(crate) fn capture(
        session_id: SessionId,
        world: &World,
        agent: &Agent,
        score: i32,
        status: SessionStatus,
        death_cause: Option<DeathCause>,
        percepts: PerceptSet,
    ) -> Self {
        let reveal = status.is_over();
        let cells = world
            .grid
            .iter()
            .map(|(coord, cell)| {
                let occupant = if !reveal {
                    None
                } else if cell.has_pit {
                    Some(Occupant::Pit)
                } else if cell.has_beast {
                    Some(Occupant::Beast {
                        alive: world.beast.alive,
                    })
                } else if cell.has_treasure {
                    Some(Occupant::Treasure)
                } else {
                    None
                };
                CellView {
                    coord,
                    visited: cell.visited,
                    current: coord == agent.position,
                    occupant,
                }
            })
            .collect();

        Self {
            session_id,
            agent: AgentView::from(agent),
            score,
            status,
            death_cause,
            percepts,
            cells,
        }
    }

    pub fn cell(&self, coord: Coord) -> Option<&CellView> {
        self.cells.iter().find(|c| c.coord == coord)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Everything the presentation layer needs after one action call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub action: Action,
    pub outcome: ActionOutcome,
    pub events: Vec<GameEvent>,
    pub score_delta: i32,
    pub snapshot: SessionSnapshot,
}

impl ActionResult {
    pub fn is_applied(&self) -> bool {
        self.outcome == ActionOutcome::Applied
    }

    pub fn has_event(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }
}
