//! Layout diagnostics
//!
//! None of these abort a generation run. The engine logs each one, records
//! it in [`Dungeon::diagnostics`](crate::Dungeon::diagnostics) and carries on
//! with whatever partial layout it has.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::Position;

/// Recoverable problems met while building a layout
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutError {
    #[error("room {room} could not be placed after {attempts} attempts")]
    PlacementExhausted { room: usize, attempts: u32 },

    #[error("no corridors to carve: {rooms} room(s) give an empty spanning tree")]
    DisconnectedGraph { rooms: usize },

    #[error("no path found between rooms {from} and {to}")]
    PathNotFound { from: usize, to: usize },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("path step {from} -> {to} is not a single cardinal move")]
    InvalidStep { from: Position, to: Position },
}
