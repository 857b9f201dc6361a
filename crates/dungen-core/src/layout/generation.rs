//! Layout generation pipeline
//!
//! Runs the stages in a fixed order: reset grid, place rooms, build the
//! spanning tree, carve one A* corridor per tree edge, detect doors, then
//! mark entry, exit and treasure. A failing stage is logged and recorded and
//! the pipeline moves on.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::cell::CellTag;
use super::corridor::{Corridor, carve_corridor, place_doors};
use super::graph::{RoomConnection, all_room_connections};
use super::grid::Grid;
use super::mst::minimum_spanning_tree;
use super::pathfind::find_path;
use super::placer::{RoomPlacer, can_place_room, place_room};
use super::room::{Position, Room};
use super::walls::{WallFaces, wall_faces};
use crate::config::{ConfigError, GeneratorConfig};
use crate::error::LayoutError;
use crate::rng::DungeonRng;

/// Finished layout handed to renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    /// Spanning tree edges, in the order they were accepted
    pub connections: Vec<RoomConnection>,
    pub corridors: Vec<Corridor>,
    pub diagnostics: Vec<LayoutError>,
    pub seed: u64,
    pub cell_size: f32,
}

impl Dungeon {
    /// World-space origin of a cell
    pub fn world_position(&self, x: usize, y: usize) -> (f32, f32) {
        (x as f32 * self.cell_size, y as f32 * self.cell_size)
    }

    /// Index of the room covering `pos`
    pub fn room_at(&self, pos: Position) -> Option<usize> {
        self.rooms.iter().position(|room| room.contains(pos))
    }

    /// Wall faces a renderer should put around `pos`
    pub fn wall_faces(&self, pos: Position) -> WallFaces {
        wall_faces(&self.grid, pos)
    }
}

/// Owns the grid and rooms for one generation run
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: GeneratorConfig,
    placer: RoomPlacer,
    grid: Grid,
    rooms: Vec<Room>,
    connections: Vec<RoomConnection>,
    corridors: Vec<Corridor>,
    diagnostics: Vec<LayoutError>,
}

impl LayoutEngine {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            placer: RoomPlacer::from_config(&config),
            grid: Grid::new(config.width, config.height),
            rooms: Vec::new(),
            connections: Vec::new(),
            corridors: Vec::new(),
            diagnostics: Vec::new(),
            config,
        })
    }

    /// Validate `config`, seed an RNG from it and run the whole pipeline
    pub fn generate(config: GeneratorConfig) -> Result<Dungeon, ConfigError> {
        let mut rng = config
            .seed
            .map(DungeonRng::new)
            .unwrap_or_else(DungeonRng::from_entropy);
        let mut engine = Self::new(config)?;
        Ok(engine.run(&mut rng))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn diagnostics(&self) -> &[LayoutError] {
        &self.diagnostics
    }

    /// Run every stage and hand over the result
    ///
    /// The engine is left reset and ready for another run.
    pub fn run(&mut self, rng: &mut DungeonRng) -> Dungeon {
        self.initialize_grid();
        self.place_rooms(rng);
        let tree = self.build_spanning_tree();
        self.carve_corridors(&tree);
        self.place_doors();
        self.finalize(rng);

        info!(
            "generated {}x{} layout: {}/{} rooms, {} corridors, {} diagnostics (seed {})",
            self.grid.width(),
            self.grid.height(),
            self.rooms.len(),
            self.config.room_count,
            self.corridors.len(),
            self.diagnostics.len(),
            rng.seed()
        );

        Dungeon {
            grid: std::mem::replace(
                &mut self.grid,
                Grid::new(self.config.width, self.config.height),
            ),
            rooms: std::mem::take(&mut self.rooms),
            connections: std::mem::take(&mut self.connections),
            corridors: std::mem::take(&mut self.corridors),
            diagnostics: std::mem::take(&mut self.diagnostics),
            seed: rng.seed(),
            cell_size: self.config.cell_size,
        }
    }

    /// Start a fresh run: empty grid, no rooms, no diagnostics
    pub fn initialize_grid(&mut self) {
        self.grid = Grid::new(self.config.width, self.config.height);
        self.rooms.clear();
        self.connections.clear();
        self.corridors.clear();
        self.diagnostics.clear();
    }

    /// Place up to `room_count` random rooms; returns how many landed
    pub fn place_rooms(&mut self, rng: &mut DungeonRng) -> usize {
        let before = self.rooms.len();
        let failures =
            self.placer
                .place_rooms(&mut self.grid, &mut self.rooms, self.config.room_count, rng);
        self.diagnostics.extend(failures);
        self.rooms.len() - before
    }

    /// Place a room at a fixed spot if it fits on empty cells
    pub fn add_room(&mut self, room: Room) -> bool {
        if !can_place_room(&self.grid, &room) {
            return false;
        }
        if let Err(err) = place_room(&mut self.grid, &room) {
            debug!("room at ({}, {}) rejected: {}", room.x, room.y, err);
            return false;
        }
        self.rooms.push(room);
        true
    }

    /// Kruskal over the complete room graph
    ///
    /// An empty tree is recorded as `DisconnectedGraph`.
    pub fn build_spanning_tree(&mut self) -> Vec<RoomConnection> {
        let edges = all_room_connections(&self.rooms);
        let tree = minimum_spanning_tree(self.rooms.len(), &edges);

        if tree.is_empty() {
            warn!("no corridors to connect: spanning tree is empty");
            self.diagnostics.push(LayoutError::DisconnectedGraph {
                rooms: self.rooms.len(),
            });
        } else {
            debug!(
                "spanning tree has {} edges over {} rooms",
                tree.len(),
                self.rooms.len()
            );
        }

        self.connections = tree.clone();
        tree
    }

    /// Search and carve one corridor per connection; returns how many were carved
    ///
    /// Each search runs from room `a`'s entry to room `b`'s exit and may only
    /// cross those two rooms.
    pub fn carve_corridors(&mut self, connections: &[RoomConnection]) -> usize {
        let mut carved = 0;

        for conn in connections {
            let (Some(&room_a), Some(&room_b)) = (self.rooms.get(conn.a), self.rooms.get(conn.b))
            else {
                warn!("connection {} - {} names an unknown room", conn.a, conn.b);
                self.diagnostics.push(LayoutError::PathNotFound {
                    from: conn.a,
                    to: conn.b,
                });
                continue;
            };

            let path = find_path(&self.grid, room_a.entry, room_b.exit, &[room_a, room_b]);
            if path.is_empty() {
                warn!("no path found between rooms {} and {}", conn.a, conn.b);
                self.diagnostics.push(LayoutError::PathNotFound {
                    from: conn.a,
                    to: conn.b,
                });
                continue;
            }

            match carve_corridor(&mut self.grid, &path) {
                Ok(cells) => {
                    debug!(
                        "path generated between {} and {}: {} steps, {} corridor cells",
                        conn.a,
                        conn.b,
                        path.len() - 1,
                        cells
                    );
                    self.corridors.push(Corridor {
                        from: conn.a,
                        to: conn.b,
                        cells: path,
                    });
                    carved += 1;
                }
                Err(err) => {
                    warn!("corridor {} - {} rejected: {}", conn.a, conn.b, err);
                    self.diagnostics.push(err);
                }
            }
        }

        carved
    }

    /// Turn corridor cells touching rooms into doors
    pub fn place_doors(&mut self) -> usize {
        let doors = place_doors(&mut self.grid, &self.rooms);
        debug!("placed {} doors", doors);
        doors
    }

    /// Mark entry and exit corners and scatter treasure
    ///
    /// Skipped when no room was placed. Treasure only lands on room floor, so
    /// it never hides the entry or exit marker.
    pub fn finalize(&mut self, rng: &mut DungeonRng) {
        if self.rooms.is_empty() {
            debug!("no rooms placed, skipping finalize");
            return;
        }

        let (w, h) = (self.grid.width(), self.grid.height());
        for (pos, tag) in [
            (Position::new(0, 0), CellTag::Entry),
            (Position::new(w - 1, h - 1), CellTag::Exit),
        ] {
            if let Err(err) = self.grid.set_at(pos, tag) {
                warn!("could not mark {}: {}", tag, err);
                self.diagnostics.push(err);
            }
        }

        for room in &self.rooms {
            if !rng.chance(self.config.treasure_chance) {
                continue;
            }
            let spot = room.random_cell(rng);
            if self.grid.at(spot) != Some(CellTag::Room) {
                continue;
            }
            if self.grid.set_at(spot, CellTag::Treasure).is_ok() {
                debug!("treasure at {}", spot);
            }
        }
    }
}
