//! Agent position, facing and inventory

use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, Orientation, TurnDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub position: Coord,
    pub orientation: Orientation,
    pub has_arrow: bool,
    pub has_treasure: bool,
}

impl Default for Agent {
    fn default() -> Self {
        Self {
            position: Coord::ORIGIN,
            orientation: Orientation::East,
            has_arrow: true,
            has_treasure: false,
        }
    }
}

impl Agent {
    /// Fresh agent at the start cell, facing east, one arrow, empty-handed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn(&mut self, direction: TurnDirection) {
        self.orientation = self.orientation.turned(direction);
    }

    /// The cell directly ahead, which may lie off the grid
    pub fn facing_cell(&self) -> Coord {
        self.position.step(self.orientation)
    }

    /// True if `target` lies strictly ahead on the agent's row or column
    pub fn is_in_line_of_fire(&self, target: Coord) -> bool {
        let p = self.position;
        match self.orientation {
            Orientation::East => target.y == p.y && target.x > p.x,
            Orientation::West => target.y == p.y && target.x < p.x,
            Orientation::North => target.x == p.x && target.y > p.y,
            Orientation::South => target.x == p.x && target.y < p.y,
        }
    }

    /// Spends the arrow; false if it was already gone
    pub fn take_arrow(&mut self) -> bool {
        std::mem::replace(&mut self.has_arrow, false)
    }

    pub fn arrow_count(&self) -> u8 {
        u8::from(self.has_arrow)
    }
}
