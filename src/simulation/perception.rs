//! Percept engine - what the agent senses from its current cell
//!
//! Only the agent's own cell and its in-bounds orthogonal neighbours are
//! consulted. Bumps and screams are action outcomes, not percepts, and live
//! on `GameEvent` instead.

use serde::{Deserialize, Serialize};

use crate::core::types::Coord;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Percept {
    /// A living beast is next door
    Stench,
    /// A pit is next door
    Breeze,
    /// The treasure is in this cell
    Glitter,
}

/// Standing percepts of one cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerceptSet {
    pub stench: bool,
    pub breeze: bool,
    pub glitter: bool,
}

impl PerceptSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, percept: Percept) -> bool {
        match percept {
            Percept::Stench => self.stench,
            Percept::Breeze => self.breeze,
            Percept::Glitter => self.glitter,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.stench || self.breeze || self.glitter)
    }

    pub fn iter(&self) -> impl Iterator<Item = Percept> + '_ {
        [Percept::Stench, Percept::Breeze, Percept::Glitter]
            .into_iter()
            .filter(move |p| self.contains(*p))
    }
}

/// Derives the percepts at `position`
pub fn compute_percepts(position: Coord, world: &World) -> PerceptSet {
    let mut percepts = PerceptSet {
        glitter: world.has_treasure(position),
        ..PerceptSet::default()
    };

    for (coord, cell) in world.grid.neighbors(position) {
        if cell.has_pit {
            percepts.breeze = true;
        }
        if world.has_live_beast(coord) {
            percepts.stench = true;
        }
    }

    percepts
}
