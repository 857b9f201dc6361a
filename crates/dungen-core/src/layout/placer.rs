//! Random room placement with overlap rejection

use tracing::{debug, warn};

use super::cell::CellTag;
use super::grid::Grid;
use super::room::Room;
use crate::config::GeneratorConfig;
use crate::error::LayoutError;
use crate::rng::DungeonRng;

/// Room size and retry policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomPlacer {
    pub min_size: usize,
    pub max_size: usize,
    pub max_attempts: u32,
}

impl RoomPlacer {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            min_size: config.min_room_size,
            max_size: config.max_room_size,
            max_attempts: config.max_placement_attempts,
        }
    }

    /// Try to place `count` rooms, appending each success to `rooms`
    ///
    /// A room that finds no free spot within the attempt budget is skipped;
    /// the returned list holds one `PlacementExhausted` per skipped room.
    pub fn place_rooms(
        &self,
        grid: &mut Grid,
        rooms: &mut Vec<Room>,
        count: usize,
        rng: &mut DungeonRng,
    ) -> Vec<LayoutError> {
        let mut failures = Vec::new();

        for i in 0..count {
            match self.try_place(grid, rng) {
                Some(room) => {
                    if let Err(err) = place_room(grid, &room) {
                        warn!("room {} rejected: {}", i, err);
                        failures.push(err);
                        continue;
                    }
                    debug!(
                        "placed room {} at ({}, {}) size {}x{}",
                        rooms.len(),
                        room.x,
                        room.y,
                        room.width,
                        room.height
                    );
                    rooms.push(room);
                }
                None => {
                    warn!(
                        "room {} could not be placed after {} attempts",
                        i, self.max_attempts
                    );
                    failures.push(LayoutError::PlacementExhausted {
                        room: i,
                        attempts: self.max_attempts,
                    });
                }
            }
        }

        failures
    }

    /// Roll candidate rectangles until one lands on empty cells
    fn try_place(&self, grid: &Grid, rng: &mut DungeonRng) -> Option<Room> {
        // A grid narrower than the smallest room can never succeed
        if grid.width() < self.min_size || grid.height() < self.min_size {
            return None;
        }

        for _ in 0..self.max_attempts {
            let width = rng.range_inclusive(self.min_size, self.max_size.min(grid.width()));
            let height = rng.range_inclusive(self.min_size, self.max_size.min(grid.height()));
            let x = rng.range_inclusive(0, grid.width() - width);
            let y = rng.range_inclusive(0, grid.height() - height);

            let candidate = Room::new(x, y, width, height);
            if can_place_room(grid, &candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Check that the room is on the grid and covers only empty cells
pub fn can_place_room(grid: &Grid, room: &Room) -> bool {
    room.fits_within(grid.width(), grid.height())
        && room.cells().all(|pos| grid.at(pos) == Some(CellTag::Empty))
}

/// Mark the room's cells as floor
///
/// A room hanging off the grid is rejected before any cell is written.
pub fn place_room(grid: &mut Grid, room: &Room) -> Result<(), LayoutError> {
    if let Some(pos) = room.cells().find(|pos| !grid.in_bounds(pos.x, pos.y)) {
        return Err(LayoutError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            width: grid.width(),
            height: grid.height(),
        });
    }
    for pos in room.cells() {
        grid.set_at(pos, CellTag::Room)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placer() -> RoomPlacer {
        RoomPlacer::from_config(&GeneratorConfig::default())
    }

    #[test]
    fn test_can_place_room() {
        let mut grid = Grid::new(10, 10);
        let room = Room::new(0, 0, 4, 4);
        assert!(can_place_room(&grid, &room));
        place_room(&mut grid, &room).unwrap();
        assert_eq!(grid.count(CellTag::Room), 16);

        // Overlapping by one cell
        assert!(!can_place_room(&grid, &Room::new(3, 3, 4, 4)));
        // Touching is fine
        assert!(can_place_room(&grid, &Room::new(4, 0, 4, 4)));
        // Hanging off the edge
        assert!(!can_place_room(&grid, &Room::new(8, 8, 4, 4)));
    }

    #[test]
    fn test_place_room_off_grid_paints_nothing() {
        let mut grid = Grid::new(10, 10);
        let err = place_room(&mut grid, &Room::new(8, 8, 4, 4)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::OutOfBounds {
                x: 10,
                y: 8,
                width: 10,
                height: 10
            }
        );
        assert_eq!(grid.count(CellTag::Empty), 100);
    }

    #[test]
    fn test_place_rooms_within_bounds() {
        let mut grid = Grid::new(30, 30);
        let mut rooms = Vec::new();
        let mut rng = DungeonRng::new(42);

        let failures = placer().place_rooms(&mut grid, &mut rooms, 10, &mut rng);
        assert_eq!(rooms.len() + failures.len(), 10);

        for (i, a) in rooms.iter().enumerate() {
            assert!(a.fits_within(30, 30));
            assert!((4..=5).contains(&a.width));
            assert!((4..=5).contains(&a.height));
            for b in &rooms[i + 1..] {
                assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
            }
        }

        let floor: usize = rooms.iter().map(|r| r.width * r.height).sum();
        assert_eq!(grid.count(CellTag::Room), floor);
    }

    #[test]
    fn test_grid_too_small() {
        let mut grid = Grid::new(3, 3);
        let mut rooms = Vec::new();
        let mut rng = DungeonRng::new(1);

        let failures = placer().place_rooms(&mut grid, &mut rooms, 1, &mut rng);
        assert!(rooms.is_empty());
        assert_eq!(
            failures,
            vec![LayoutError::PlacementExhausted {
                room: 0,
                attempts: 100
            }]
        );
        assert_eq!(grid.count(CellTag::Empty), 9);
    }

    #[test]
    fn test_crowded_grid_skips_rooms() {
        // Only one 4x4 room fits on a 5x5 grid
        let mut grid = Grid::new(5, 5);
        let mut rooms = Vec::new();
        let mut rng = DungeonRng::new(3);

        let failures = placer().place_rooms(&mut grid, &mut rooms, 3, &mut rng);
        assert_eq!(rooms.len(), 1);
        assert_eq!(failures.len(), 2);
    }
}
