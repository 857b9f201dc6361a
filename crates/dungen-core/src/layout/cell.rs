//! Cell tags and travel directions
//!
//! The tag vocabulary is shared with renderers, so the numeric values are
//! fixed. Door, entry and exit each own a value no corridor tag uses.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Grid cell tag
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellTag {
    #[default]
    Empty = 0,
    Room = 1,
    CorridorNorth = 2,
    CorridorSouth = 3,
    CorridorWest = 4,
    CorridorEast = 5,
    Treasure = 6,
    Door = 7,
    Entry = 8,
    Exit = 9,
}

impl CellTag {
    /// Raw tag value
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Decode a raw tag value
    pub const fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            0 => CellTag::Empty,
            1 => CellTag::Room,
            2 => CellTag::CorridorNorth,
            3 => CellTag::CorridorSouth,
            4 => CellTag::CorridorWest,
            5 => CellTag::CorridorEast,
            6 => CellTag::Treasure,
            7 => CellTag::Door,
            8 => CellTag::Entry,
            9 => CellTag::Exit,
            _ => return None,
        })
    }

    /// Check if this is one of the four corridor tags
    pub const fn is_corridor(self) -> bool {
        matches!(
            self,
            CellTag::CorridorNorth
                | CellTag::CorridorSouth
                | CellTag::CorridorWest
                | CellTag::CorridorEast
        )
    }

    /// Travel direction of a corridor tag
    pub const fn direction(self) -> Option<Direction> {
        match self {
            CellTag::CorridorNorth => Some(Direction::North),
            CellTag::CorridorSouth => Some(Direction::South),
            CellTag::CorridorWest => Some(Direction::West),
            CellTag::CorridorEast => Some(Direction::East),
            _ => None,
        }
    }

    /// Anything other than an empty cell gets floor geometry
    pub const fn is_floor(self) -> bool {
        !matches!(self, CellTag::Empty)
    }

    /// Get the display character for this tag
    pub const fn symbol(self) -> char {
        match self {
            CellTag::Empty => ' ',
            CellTag::Room => '.',
            CellTag::CorridorNorth => '^',
            CellTag::CorridorSouth => 'v',
            CellTag::CorridorWest => '<',
            CellTag::CorridorEast => '>',
            CellTag::Treasure => '$',
            CellTag::Door => '+',
            CellTag::Entry => 'E',
            CellTag::Exit => 'X',
        }
    }
}

/// Cardinal step on the grid. North is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// `(dx, dy)` of one step
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    /// Direction of a unit step, `None` for zero or diagonal moves
    pub const fn from_delta(dx: i64, dy: i64) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            (1, 0) => Some(Direction::East),
            _ => None,
        }
    }

    /// Corridor tag carved for travel in this direction
    pub const fn corridor_tag(self) -> CellTag {
        match self {
            Direction::North => CellTag::CorridorNorth,
            Direction::South => CellTag::CorridorSouth,
            Direction::West => CellTag::CorridorWest,
            Direction::East => CellTag::CorridorEast,
        }
    }
}
