//! Kruskal's minimum spanning tree over the room graph

use tracing::debug;

use super::graph::RoomConnection;

/// Disjoint-set forest over room indices
///
/// Union by rank with full path compression in `find`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Create `n` singleton sets
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of `i`'s set; every node on the way is re-pointed at the root
    ///
    /// # Panics
    /// If `i` is not below `len()`.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets holding `a` and `b`; false if they were already one set
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }
        true
    }

    /// Check if two elements share a set; out-of-range indices never do
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        if a >= self.len() || b >= self.len() {
            return false;
        }
        self.find(a) == self.find(b)
    }

    /// Number of distinct sets
    pub fn set_count(&mut self) -> usize {
        (0..self.len()).filter(|&i| self.find(i) == i).count()
    }
}

/// Select the spanning tree edges from a distance-ordered edge list
///
/// `edges` must already be sorted ascending (see
/// [`all_room_connections`](super::all_room_connections)). Stops once
/// `room_count - 1` edges are taken. Edges naming a room at or past
/// `room_count` are ignored.
pub fn minimum_spanning_tree(room_count: usize, edges: &[RoomConnection]) -> Vec<RoomConnection> {
    let mut sets = DisjointSet::new(room_count);
    let mut tree = Vec::with_capacity(room_count.saturating_sub(1));

    for edge in edges {
        if tree.len() + 1 >= room_count {
            break;
        }
        if edge.a >= room_count || edge.b >= room_count {
            continue;
        }
        if sets.union(edge.a, edge.b) {
            debug!(
                "spanning tree edge {} - {} ({:.2})",
                edge.a, edge.b, edge.distance
            );
            tree.push(*edge);
        }
    }

    tree
}
