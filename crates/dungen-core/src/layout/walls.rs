//! Wall-face inference for renderers
//!
//! The grid stores no walls. A floor cell gets a wall on every side whose
//! neighbour is empty or past the grid edge.

use bitflags::bitflags;

use super::cell::{CellTag, Direction};
use super::grid::Grid;
use super::room::Position;

bitflags! {
    /// Sides of a cell that need wall geometry
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WallFaces: u8 {
        const NORTH = 0x01;
        const SOUTH = 0x02;
        const WEST = 0x04;
        const EAST = 0x08;
    }
}

impl WallFaces {
    /// Face for one side
    pub const fn from_direction(dir: Direction) -> Self {
        match dir {
            Direction::North => WallFaces::NORTH,
            Direction::South => WallFaces::SOUTH,
            Direction::West => WallFaces::WEST,
            Direction::East => WallFaces::EAST,
        }
    }
}

const SIDES: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

/// Wall faces around `pos`
///
/// Empty cells and positions off the grid have no walls of their own.
pub fn wall_faces(grid: &Grid, pos: Position) -> WallFaces {
    match grid.at(pos) {
        Some(tag) if tag.is_floor() => {}
        _ => return WallFaces::empty(),
    }

    SIDES
        .into_iter()
        .filter(|&dir| matches!(grid.neighbor(pos, dir), None | Some(CellTag::Empty)))
        .fold(WallFaces::empty(), |faces, dir| {
            faces | WallFaces::from_direction(dir)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_cell_has_four_walls() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, CellTag::CorridorEast).unwrap();
        assert_eq!(wall_faces(&grid, Position::new(1, 1)), WallFaces::all());
    }

    #[test]
    fn test_grid_edge_counts_as_empty() {
        let mut grid = Grid::new(2, 1);
        grid.set(0, 0, CellTag::Room).unwrap();
        grid.set(1, 0, CellTag::Room).unwrap();
        assert_eq!(
            wall_faces(&grid, Position::new(0, 0)),
            WallFaces::NORTH | WallFaces::SOUTH | WallFaces::WEST
        );
    }

    #[test]
    fn test_corridor_segment() {
        let mut grid = Grid::new(3, 3);
        for x in 0..3 {
            grid.set(x, 1, CellTag::CorridorEast).unwrap();
        }
        assert_eq!(
            wall_faces(&grid, Position::new(1, 1)),
            WallFaces::NORTH | WallFaces::SOUTH
        );
    }

    #[test]
    fn test_empty_cell_has_no_walls() {
        let grid = Grid::new(3, 3);
        assert!(wall_faces(&grid, Position::new(1, 1)).is_empty());
        assert!(wall_faces(&grid, Position::new(7, 7)).is_empty());
    }
}
