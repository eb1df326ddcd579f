//! The hidden world: grid contents plus the item registries

pub mod generation;
pub mod grid;

pub use generation::{check_capacity, Layout, PlacementPlan, WorldGenerator};
pub use grid::{Cell, Grid, GRID_HEIGHT, GRID_WIDTH};

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::Coord;

/// The beast never moves; only `alive` changes, and only once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beast {
    pub position: Coord,
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub grid: Grid,
    pub beast: Beast,
    /// Where the treasure was placed; the grid flag is cleared once grabbed
    pub treasure: Coord,
    pub pits: Vec<Coord>,
}

impl World {
    /// Builds a world from validated placements, with the start cell visited
    pub fn from_layout(layout: &Layout) -> Result<Self> {
        layout.validate(GRID_WIDTH, GRID_HEIGHT)?;

        let mut grid = Grid::new();
        for &pit in &layout.pits {
            if let Some(cell) = grid.get_mut(pit) {
                cell.has_pit = true;
            }
        }
        if let Some(cell) = grid.get_mut(layout.beast) {
            cell.has_beast = true;
        }
        if let Some(cell) = grid.get_mut(layout.treasure) {
            cell.has_treasure = true;
        }
        grid.mark_visited(Coord::ORIGIN);

        Ok(Self {
            grid,
            beast: Beast {
                position: layout.beast,
                alive: true,
            },
            treasure: layout.treasure,
            pits: layout.pits.clone(),
        })
    }

    /// The placements this world was built from
    pub fn layout(&self) -> Layout {
        Layout::new(self.pits.clone(), self.beast.position, self.treasure)
    }

    pub fn has_pit(&self, coord: Coord) -> bool {
        self.grid.get(coord).map_or(false, |c| c.has_pit)
    }

    pub fn has_live_beast(&self, coord: Coord) -> bool {
        self.beast.alive && self.beast.position == coord
    }

    /// True while the treasure is still lying at `coord`
    pub fn has_treasure(&self, coord: Coord) -> bool {
        self.grid.get(coord).map_or(false, |c| c.has_treasure)
    }

    /// Lifts the treasure off `coord`; false if there was none
    pub fn take_treasure(&mut self, coord: Coord) -> bool {
        match self.grid.get_mut(coord) {
            Some(cell) if cell.has_treasure => {
                cell.has_treasure = false;
                true
            }
            _ => false,
        }
    }

    /// Kills the beast; false if it was already dead
    pub fn kill_beast(&mut self) -> bool {
        let was_alive = self.beast.alive;
        self.beast.alive = false;
        was_alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(
            vec![Coord::new(2, 0), Coord::new(2, 2)],
            Coord::new(0, 2),
            Coord::new(1, 2),
        )
    }

    #[test]
    fn test_from_layout_sets_flags() {
        let world = World::from_layout(&layout()).unwrap();
        assert_eq!(world.grid.count_where(|c| c.has_pit), 2);
        assert_eq!(world.grid.count_where(|c| c.has_beast), 1);
        assert_eq!(world.grid.count_where(|c| c.has_treasure), 1);
        assert!(world.grid.get(Coord::ORIGIN).unwrap().visited);
        assert!(!world.grid.get(Coord::ORIGIN).unwrap().is_occupied());
        assert_eq!(world.layout(), layout());
    }

    #[test]
    fn test_take_treasure_once() {
        let mut world = World::from_layout(&layout()).unwrap();
        assert!(!world.take_treasure(Coord::new(3, 3)));
        assert!(world.take_treasure(Coord::new(1, 2)));
        assert!(!world.take_treasure(Coord::new(1, 2)));
        assert!(!world.has_treasure(Coord::new(1, 2)));
    }

    #[test]
    fn test_kill_beast_keeps_position() {
        let mut world = World::from_layout(&layout()).unwrap();
        assert!(world.has_live_beast(Coord::new(0, 2)));
        assert!(world.kill_beast());
        assert!(!world.kill_beast());
        assert!(!world.has_live_beast(Coord::new(0, 2)));
        assert_eq!(world.beast.position, Coord::new(0, 2));
    }
}
