//! Fixed-size cell matrix holding hidden contents and exploration flags

use serde::{Deserialize, Serialize};

use crate::core::types::Coord;

pub const GRID_WIDTH: usize = 4;
pub const GRID_HEIGHT: usize = 4;

/// Contents of one grid square
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_pit: bool,
    pub has_beast: bool,
    pub has_treasure: bool,
    pub visited: bool,
}

impl Cell {
    /// True if a pit, the beast or the treasure sits here
    pub fn is_occupied(&self) -> bool {
        self.has_pit || self.has_beast || self.has_treasure
    }
}

/// The board, indexed `cells[y][x]` with `(0, 0)` bottom-left
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_WIDTH]; GRID_HEIGHT],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < GRID_WIDTH
            && (coord.y as usize) < GRID_HEIGHT
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if self.in_bounds(coord) {
            Some(&self.cells[coord.y as usize][coord.x as usize])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if self.in_bounds(coord) {
            Some(&mut self.cells[coord.y as usize][coord.x as usize])
        } else {
            None
        }
    }

    /// In-bounds orthogonal neighbours of `coord`
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        coord
            .neighbors()
            .into_iter()
            .filter_map(move |n| self.get(n).map(|cell| (n, cell)))
    }

    /// Marks a cell visited; returns false if off-grid
    pub fn mark_visited(&mut self, coord: Coord) -> bool {
        match self.get_mut(coord) {
            Some(cell) => {
                cell.visited = true;
                true
            }
            None => false,
        }
    }

    /// Row-major iteration from `(0, 0)` upward
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Coord::new(x as i32, y as i32), cell))
        })
    }

    pub fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> usize {
        self.iter().filter(|(_, cell)| predicate(cell)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let grid = Grid::new();
        assert!(grid.in_bounds(Coord::new(0, 0)));
        assert!(grid.in_bounds(Coord::new(3, 3)));
        assert!(!grid.in_bounds(Coord::new(4, 0)));
        assert!(!grid.in_bounds(Coord::new(0, -1)));
        assert!(grid.get(Coord::new(-1, 2)).is_none());
    }

    #[test]
    fn test_corner_has_two_neighbors() {
        let grid = Grid::new();
        assert_eq!(grid.neighbors(Coord::ORIGIN).count(), 2);
        assert_eq!(grid.neighbors(Coord::new(1, 0)).count(), 3);
        assert_eq!(grid.neighbors(Coord::new(1, 1)).count(), 4);
    }

    #[test]
    fn test_iter_covers_every_cell_once() {
        let grid = Grid::new();
        let coords: Vec<Coord> = grid.iter().map(|(c, _)| c).collect();
        assert_eq!(coords.len(), GRID_WIDTH * GRID_HEIGHT);
        assert_eq!(coords[0], Coord::ORIGIN);
        assert_eq!(coords[1], Coord::new(1, 0));
    }

    #[test]
    fn test_mark_visited() {
        let mut grid = Grid::new();
        assert!(grid.mark_visited(Coord::new(2, 1)));
        assert!(!grid.mark_visited(Coord::new(9, 9)));
        assert_eq!(grid.count_where(|c| c.visited), 1);
    }
}
