//! Rooms and grid positions

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cell::Direction;
use crate::rng::DungeonRng;

/// Grid coordinate, `x` to the east and `y` to the south
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// One step in `dir`, or `None` when it would leave a `width`x`height` grid
    pub fn step(self, dir: Direction, width: usize, height: usize) -> Option<Position> {
        let (dx, dy) = dir.delta();
        let x = self.x.checked_add_signed(dx as isize)?;
        let y = self.y.checked_add_signed(dy as isize)?;
        (x < width && y < height).then_some(Position { x, y })
    }

    /// Straight-line distance
    pub fn distance(self, other: Position) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Four-directional step count
    pub fn manhattan(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// A placed rectangular room
///
/// Entry and exit are both the midpoint of the rectangle, rounded toward the
/// top-left on even sides. Corridor searches start at one room's entry and
/// end at the other room's exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Left x coordinate
    pub x: usize,
    /// Top y coordinate
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub entry: Position,
    pub exit: Position,
}

impl Room {
    /// Create a room; `width` and `height` must be at least 1
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        let mid = Position::new(
            x + width.saturating_sub(1) / 2,
            y + height.saturating_sub(1) / 2,
        );
        Self {
            x,
            y,
            width,
            height,
            entry: mid,
            exit: mid,
        }
    }

    /// One past the rightmost column
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Geometric center; used for the connection graph
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    /// Euclidean distance between the centers of two rooms
    pub fn center_distance(&self, other: &Room) -> f64 {
        let (ax, ay) = self.center();
        let (bx, by) = other.center();
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
    }

    /// Check if the position is on this room's floor
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x && pos.x < self.right() && pos.y >= self.y && pos.y < self.bottom()
    }

    /// Check if the two rectangles share any cell
    pub fn intersects(&self, other: &Room) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Check if the room fits inside a `width`x`height` grid
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.width > 0 && self.height > 0 && self.right() <= width && self.bottom() <= height
    }

    /// Every floor cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| Position { x, y }))
    }

    /// Cells one step outside each edge, clipped to the grid
    ///
    /// Corners are not included: the ring only holds cells that share a side
    /// with the room.
    pub fn ring(&self, width: usize, height: usize) -> Vec<Position> {
        let mut ring = Vec::with_capacity(2 * (self.width + self.height));
        for x in self.x..self.right() {
            // Top edge
            if self.y > 0 {
                ring.push(Position::new(x, self.y - 1));
            }
            // Bottom edge
            if self.bottom() < height {
                ring.push(Position::new(x, self.bottom()));
            }
        }
        for y in self.y..self.bottom() {
            // Left edge
            if self.x > 0 {
                ring.push(Position::new(self.x - 1, y));
            }
            // Right edge
            if self.right() < width {
                ring.push(Position::new(self.right(), y));
            }
        }
        ring
    }

    /// Uniformly random floor cell
    pub fn random_cell(&self, rng: &mut DungeonRng) -> Position {
        Position::new(
            rng.range_inclusive(self.x, self.right().saturating_sub(1)),
            rng.range_inclusive(self.y, self.bottom().saturating_sub(1)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_rounds_down() {
        let room = Room::new(2, 3, 4, 5);
        assert_eq!(room.entry, Position::new(3, 5));
        assert_eq!(room.exit, room.entry);

        let odd = Room::new(0, 0, 5, 5);
        assert_eq!(odd.entry, Position::new(2, 2));
    }

    #[test]
    fn test_center_uses_half_cells() {
        let room = Room::new(0, 0, 5, 4);
        assert_eq!(room.center(), (2.5, 2.0));
        let other = Room::new(6, 6, 4, 4);
        let d = Room::new(0, 0, 4, 4).center_distance(&other);
        assert!((d - (72.0f64).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_intersects() {
        let a = Room::new(0, 0, 4, 4);
        assert!(a.intersects(&Room::new(3, 3, 4, 4)));
        assert!(!a.intersects(&Room::new(4, 0, 4, 4)));
        assert!(!a.intersects(&Room::new(0, 4, 4, 4)));
    }

    #[test]
    fn test_ring_clipped_to_grid() {
        let corner = Room::new(0, 0, 4, 4);
        let ring = corner.ring(10, 10);
        // Only the bottom and right edges exist
        assert_eq!(ring.len(), 8);
        assert!(ring.iter().all(|p| p.x == 4 || p.y == 4));
        assert!(ring.iter().all(|p| !corner.contains(*p)));

        let inner = Room::new(3, 3, 2, 3);
        assert_eq!(inner.ring(10, 10).len(), 2 * (2 + 3));
    }

    #[test]
    fn test_step_stays_in_grid() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::North, 5, 5), None);
        assert_eq!(origin.step(Direction::West, 5, 5), None);
        assert_eq!(origin.step(Direction::East, 5, 5), Some(Position::new(1, 0)));
        assert_eq!(Position::new(4, 4).step(Direction::South, 5, 5), None);
    }

    #[test]
    fn test_cells_cover_room() {
        let room = Room::new(1, 2, 3, 2);
        let cells: Vec<_> = room.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Position::new(1, 2));
        assert_eq!(cells[5], Position::new(3, 3));
    }
}
