//! Layout system
//!
//! Grid, rooms, room graph, spanning tree, corridor search and carving, and
//! the engine that runs them in order.

mod cell;
mod corridor;
mod generation;
mod graph;
mod grid;
mod mst;
mod pathfind;
mod placer;
mod room;
mod walls;

pub use cell::{CellTag, Direction};
pub use corridor::{Corridor, carve_corridor, place_doors};
pub use generation::{Dungeon, LayoutEngine};
pub use graph::{RoomConnection, all_room_connections};
pub use grid::Grid;
pub use mst::{DisjointSet, minimum_spanning_tree};
pub use pathfind::find_path;
pub use placer::{RoomPlacer, can_place_room, place_room};
pub use room::{Position, Room};
pub use walls::{WallFaces, wall_faces};
