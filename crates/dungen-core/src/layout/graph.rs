//! Complete room graph weighted by center distance

use serde::{Deserialize, Serialize};

use super::room::Room;

/// Edge between two rooms, identified by their index in the room list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomConnection {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

impl RoomConnection {
    pub fn new(a: usize, b: usize, distance: f64) -> Self {
        Self { a, b, distance }
    }
}

/// Every unordered room pair, shortest first
///
/// Pairs are generated as `(i, j)` with `i < j` in lexicographic order and
/// then stable-sorted, so equal distances keep generation order.
pub fn all_room_connections(rooms: &[Room]) -> Vec<RoomConnection> {
    let n = rooms.len();
    let mut connections = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for i in 0..n {
        for j in i + 1..n {
            connections.push(RoomConnection::new(
                i,
                j,
                rooms[i].center_distance(&rooms[j]),
            ));
        }
    }

    connections.sort_by(|x, y| x.distance.total_cmp(&y.distance));
    connections
}
