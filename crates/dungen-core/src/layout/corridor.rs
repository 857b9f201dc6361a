//! Corridor carving and door detection
//!
//! Each step of a path tags its origin cell with the direction of travel.
//! Room floor always wins over corridor tags. After every corridor is in,
//! corridor cells that touch a room from outside become doors.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cell::{CellTag, Direction};
use super::grid::Grid;
use super::room::{Position, Room};
use crate::error::LayoutError;

/// A carved path between two rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    /// Index of the room the search started in
    pub from: usize,
    /// Index of the room the search ended in
    pub to: usize,
    /// Path cells, start first
    pub cells: Vec<Position>,
}

/// Direction of a single path step
fn step_direction(from: Position, to: Position) -> Result<Direction, LayoutError> {
    let dx = to.x as i64 - from.x as i64;
    let dy = to.y as i64 - from.y as i64;
    Direction::from_delta(dx, dy).ok_or(LayoutError::InvalidStep { from, to })
}

/// Write corridor tags along `path`
///
/// The whole path is checked before anything is written: a zero-length or
/// diagonal step, or a cell off the grid, leaves the grid untouched. Returns
/// the number of cells that received a corridor tag.
pub fn carve_corridor(grid: &mut Grid, path: &[Position]) -> Result<usize, LayoutError> {
    let mut steps = Vec::with_capacity(path.len().saturating_sub(1));
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        for pos in [from, to] {
            if !grid.in_bounds(pos.x, pos.y) {
                return Err(LayoutError::OutOfBounds {
                    x: pos.x,
                    y: pos.y,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
        }
        steps.push((from, step_direction(from, to)?));
    }

    let mut carved = 0;
    for (origin, dir) in steps {
        if grid.at(origin) == Some(CellTag::Room) {
            continue;
        }
        grid.set_at(origin, dir.corridor_tag())?;
        carved += 1;
    }
    Ok(carved)
}

/// Retag corridor cells on each room's outer ring as doors
///
/// Returns the number of doors created.
pub fn place_doors(grid: &mut Grid, rooms: &[Room]) -> usize {
    let mut doors = 0;

    for (i, room) in rooms.iter().enumerate() {
        for pos in room.ring(grid.width(), grid.height()) {
            if grid.at(pos).is_some_and(CellTag::is_corridor) && grid.set_at(pos, CellTag::Door).is_ok()
            {
                debug!("door at {} for room {}", pos, i);
                doors += 1;
            }
        }
    }

    doors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::place_room;

    fn line(y: usize, xs: std::ops::RangeInclusive<usize>) -> Vec<Position> {
        xs.map(|x| Position::new(x, y)).collect()
    }

    #[test]
    fn test_tag_written_at_step_origin() {
        let mut grid = Grid::new(6, 3);
        let path = line(1, 0..=4);

        assert_eq!(carve_corridor(&mut grid, &path), Ok(4));
        for x in 0..4 {
            assert_eq!(grid.get(x, 1), Some(CellTag::CorridorEast));
        }
        // The final cell is only a destination
        assert_eq!(grid.get(4, 1), Some(CellTag::Empty));
    }

    #[test]
    fn test_each_direction() {
        let mut grid = Grid::new(3, 3);
        let path = vec![
            Position::new(0, 0),
            Position::new(0, 1), // south
            Position::new(1, 1), // east
            Position::new(1, 0), // north
            Position::new(2, 0), // east
            Position::new(2, 1), // south
            Position::new(2, 2), // south
            Position::new(1, 2), // west
        ];
        carve_corridor(&mut grid, &path).unwrap();
        assert_eq!(grid.get(0, 0), Some(CellTag::CorridorSouth));
        assert_eq!(grid.get(0, 1), Some(CellTag::CorridorEast));
        assert_eq!(grid.get(1, 1), Some(CellTag::CorridorNorth));
        assert_eq!(grid.get(1, 0), Some(CellTag::CorridorEast));
        assert_eq!(grid.get(2, 2), Some(CellTag::CorridorWest));
    }

    #[test]
    fn test_room_cells_are_kept() {
        let mut grid = Grid::new(8, 3);
        place_room(&mut grid, &Room::new(0, 0, 2, 3)).unwrap();

        let carved = carve_corridor(&mut grid, &line(1, 0..=6)).unwrap();
        assert_eq!(carved, 4);
        assert_eq!(grid.get(0, 1), Some(CellTag::Room));
        assert_eq!(grid.get(1, 1), Some(CellTag::Room));
        assert_eq!(grid.get(2, 1), Some(CellTag::CorridorEast));
    }

    #[test]
    fn test_invalid_steps_leave_grid_untouched() {
        let mut grid = Grid::new(5, 5);
        let diagonal = vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 1)];
        assert_eq!(
            carve_corridor(&mut grid, &diagonal),
            Err(LayoutError::InvalidStep {
                from: Position::new(1, 0),
                to: Position::new(2, 1)
            })
        );

        let repeated = vec![Position::new(3, 3), Position::new(3, 3)];
        assert!(carve_corridor(&mut grid, &repeated).is_err());

        let off_grid = vec![Position::new(4, 0), Position::new(5, 0)];
        assert!(matches!(
            carve_corridor(&mut grid, &off_grid),
            Err(LayoutError::OutOfBounds { x: 5, .. })
        ));

        assert_eq!(grid.count(CellTag::Empty), 25);
    }

    #[test]
    fn test_doors_only_on_room_ring() {
        let mut grid = Grid::new(10, 5);
        let room = Room::new(3, 1, 3, 3);
        place_room(&mut grid, &room).unwrap();

        // Corridor running along row 0 above the room, then a stray far away
        carve_corridor(&mut grid, &line(0, 0..=9)).unwrap();
        grid.set(0, 4, CellTag::CorridorSouth).unwrap();

        let doors = place_doors(&mut grid, &[room]);
        assert_eq!(doors, 3);
        for x in 3..6 {
            assert_eq!(grid.get(x, 0), Some(CellTag::Door));
        }
        // Diagonal corners and distant cells stay corridors
        assert_eq!(grid.get(2, 0), Some(CellTag::CorridorEast));
        assert_eq!(grid.get(6, 0), Some(CellTag::CorridorEast));
        assert_eq!(grid.get(0, 4), Some(CellTag::CorridorSouth));
        assert_eq!(grid.count(CellTag::Room), 9);
    }

    #[test]
    fn test_any_corridor_direction_becomes_door() {
        let mut grid = Grid::new(5, 5);
        let room = Room::new(1, 1, 3, 3);
        place_room(&mut grid, &room).unwrap();
        grid.set(0, 2, CellTag::CorridorEast).unwrap();
        grid.set(4, 2, CellTag::CorridorWest).unwrap();
        grid.set(2, 0, CellTag::CorridorSouth).unwrap();
        grid.set(2, 4, CellTag::CorridorNorth).unwrap();

        assert_eq!(place_doors(&mut grid, &[room]), 4);
        assert_eq!(grid.count(CellTag::Door), 4);
        assert_eq!(grid.count_where(CellTag::is_corridor), 0);
    }
}
