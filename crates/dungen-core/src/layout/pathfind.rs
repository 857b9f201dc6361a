//! A* corridor search over the tagged grid
//!
//! Search nodes live by value in an arena owned by one `find_path` call, with
//! a position lookup table next to it. Predecessors are arena slots, so the
//! whole node set is dropped when the call returns.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashMap;

use super::cell::{CellTag, Direction};
use super::grid::Grid;
use super::room::{Position, Room};

/// Neighbour expansion order: east, west, south, north
const DIRECTIONS: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::North,
];

/// Search-local node
#[derive(Debug, Clone, Copy)]
struct PathNode {
    position: Position,
    g_cost: f64,
    h_cost: f64,
    predecessor: Option<usize>,
}

/// Frontier entry for the priority queue
///
/// Entries are never updated in place: an improved node is pushed again and
/// the outdated entry is dropped when popped.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f_cost: f64,
    h_cost: f64,
    g_cost: f64,
    seq: u64,
    slot: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior: lowest f, then lowest h,
        // then the earliest pushed entry
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.h_cost.total_cmp(&self.h_cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Check if a corridor may pass through `pos`
///
/// Empty cells and existing corridors are open; room floor only when it
/// belongs to one of the `crossable` rooms.
fn is_walkable(grid: &Grid, pos: Position, crossable: &[Room]) -> bool {
    match grid.at(pos) {
        Some(CellTag::Empty) => true,
        Some(tag) if tag.is_corridor() => true,
        Some(_) => crossable.iter().any(|room| room.contains(pos)),
        None => false,
    }
}

/// Walk predecessor links back from `slot` and return the path start-first
fn reconstruct_path(nodes: &[PathNode], slot: usize) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = Some(slot);

    while let Some(idx) = current {
        path.push(nodes[idx].position);
        current = nodes[idx].predecessor;
    }

    path.reverse();
    path
}

/// Find a 4-connected path from `start` to `target`
///
/// Returns every cell from `start` to `target` inclusive, or an empty vector
/// when either end is off the grid or the target cannot be reached.
/// `crossable` lists the rooms whose floor the corridor may run through,
/// normally the two rooms being joined.
pub fn find_path(
    grid: &Grid,
    start: Position,
    target: Position,
    crossable: &[Room],
) -> Vec<Position> {
    search(grid, start, target, crossable).0
}

/// A* proper; also returns how many nodes were closed
fn search(
    grid: &Grid,
    start: Position,
    target: Position,
    crossable: &[Room],
) -> (Vec<Position>, usize) {
    if !grid.in_bounds(start.x, start.y) || !grid.in_bounds(target.x, target.y) {
        return (Vec::new(), 0);
    }

    let mut nodes: Vec<PathNode> = Vec::new();
    let mut lookup: HashMap<Position, usize> = HashMap::new();
    let mut closed: Vec<bool> = Vec::new();
    let mut open_set = BinaryHeap::new();
    let mut seq = 0u64;
    let mut expanded = 0;

    let h = start.distance(target);
    nodes.push(PathNode {
        position: start,
        g_cost: 0.0,
        h_cost: h,
        predecessor: None,
    });
    closed.push(false);
    lookup.insert(start, 0);
    open_set.push(OpenEntry {
        f_cost: h,
        h_cost: h,
        g_cost: 0.0,
        seq,
        slot: 0,
    });

    while let Some(entry) = open_set.pop() {
        let slot = entry.slot;
        if closed[slot] || entry.g_cost > nodes[slot].g_cost {
            continue;
        }
        closed[slot] = true;
        expanded += 1;

        let current = nodes[slot];
        if current.position == target {
            return (reconstruct_path(&nodes, slot), expanded);
        }

        for dir in DIRECTIONS {
            let Some(next) = current.position.step(dir, grid.width(), grid.height()) else {
                continue;
            };
            if !is_walkable(grid, next, crossable) {
                continue;
            }

            let tentative_g = current.g_cost + current.position.distance(next);

            let next_slot = match lookup.get(&next) {
                None => {
                    let idx = nodes.len();
                    nodes.push(PathNode {
                        position: next,
                        g_cost: tentative_g,
                        h_cost: next.distance(target),
                        predecessor: Some(slot),
                    });
                    closed.push(false);
                    lookup.insert(next, idx);
                    idx
                }
                Some(&idx) if !closed[idx] && tentative_g < nodes[idx].g_cost => {
                    nodes[idx].g_cost = tentative_g;
                    nodes[idx].predecessor = Some(slot);
                    idx
                }
                Some(_) => continue,
            };

            seq += 1;
            let node = &nodes[next_slot];
            open_set.push(OpenEntry {
                f_cost: node.g_cost + node.h_cost,
                h_cost: node.h_cost,
                g_cost: node.g_cost,
                seq,
                slot: next_slot,
            });
        }
    }

    (Vec::new(), expanded) // No path found
}
