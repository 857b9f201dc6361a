//! dungen-core: 2D dungeon layout generation
//!
//! Places rectangular rooms on a tagged grid, links them with the minimum
//! spanning tree of their center distances, and carves each link as an A*
//! corridor. The crate does no I/O; hosts consume the finished [`Dungeon`]
//! and turn its grid into geometry.

pub mod config;
pub mod error;
pub mod layout;

mod consts;
mod rng;

pub use config::{ConfigError, GeneratorConfig};
pub use consts::*;
pub use error::LayoutError;
pub use layout::{
    CellTag, Corridor, Direction, Dungeon, Grid, LayoutEngine, Position, Room, RoomConnection,
    WallFaces,
};
pub use rng::DungeonRng;
