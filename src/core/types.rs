//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grid coordinate. `(0, 0)` is the bottom-left start cell; `y` grows north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The adjacent coordinate one step in `orientation` (may be off-grid)
    pub fn step(&self, orientation: Orientation) -> Self {
        let (dx, dy) = orientation.delta();
        self.offset(dx, dy)
    }

    /// The four orthogonal neighbours, unfiltered by grid bounds
    pub fn neighbors(&self) -> [Coord; 4] {
        [
            self.offset(0, 1),
            self.offset(0, -1),
            self.offset(-1, 0),
            self.offset(1, 0),
        ]
    }

    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass facing of the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Counter-clockwise quarter turn
    pub fn left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Clockwise quarter turn
    pub fn right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    pub fn turned(self, direction: TurnDirection) -> Self {
        match direction {
            TurnDirection::Left => self.left(),
            TurnDirection::Right => self.right(),
        }
    }

    /// Unit step `(dx, dy)` for this facing
    pub fn delta(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::East => (1, 0),
            Orientation::South => (0, -1),
            Orientation::West => (-1, 0),
        }
    }

    /// Arrow glyph used by text front ends
    pub fn glyph(self) -> char {
        match self {
            Orientation::North => '^',
            Orientation::East => '>',
            Orientation::South => 'v',
            Orientation::West => '<',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnDirection {
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_and_right_are_inverse() {
        for o in [Orientation::North, Orientation::East, Orientation::South, Orientation::West] {
            assert_eq!(o.left().right(), o);
            assert_eq!(o.right().left(), o);
        }
    }

    #[test]
    fn test_four_left_turns_return_to_start() {
        let start = Orientation::East;
        let end = (0..4).fold(start, |o, _| o.turned(TurnDirection::Left));
        assert_eq!(end, start);
    }

    #[test]
    fn test_left_from_east_faces_north() {
        // Matches the board convention: north is +y
        assert_eq!(Orientation::East.left(), Orientation::North);
        assert_eq!(Coord::ORIGIN.step(Orientation::North), Coord::new(0, 1));
    }

    #[test]
    fn test_step_follows_delta() {
        let c = Coord::new(2, 2);
        assert_eq!(c.step(Orientation::East), Coord::new(3, 2));
        assert_eq!(c.step(Orientation::West), Coord::new(1, 2));
        assert_eq!(c.step(Orientation::South), Coord::new(2, 1));
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }
}
