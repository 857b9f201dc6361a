//! Generator configuration
//!
//! Read-only inputs to a generation run. Unset fields fall back to the
//! defaults in [`consts`](crate::consts), so a partial JSON document is a
//! valid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_ROOM_COUNT, DEFAULT_WIDTH, MAX_PLACEMENT_ATTEMPTS,
    MAX_ROOM_SIZE, MIN_ROOM_SIZE, TREASURE_CHANCE,
};

/// Rejected configuration values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },

    #[error("invalid room size range {min}..={max}")]
    RoomSizeRange { min: usize, max: usize },

    #[error("placement attempts must be at least 1")]
    NoAttempts,

    #[error("cell size must be a positive finite number (got {0})")]
    CellSize(f32),

    #[error("treasure chance must lie in [0, 1] (got {0})")]
    TreasureChance(f64),
}

/// Parameters for one layout run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    /// World units per cell; the layout algorithm never reads it
    pub cell_size: f32,
    pub room_count: usize,
    /// Fixed seed, or `None` to draw one from entropy
    pub seed: Option<u64>,
    pub min_room_size: usize,
    pub max_room_size: usize,
    pub max_placement_attempts: u32,
    pub treasure_chance: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            room_count: DEFAULT_ROOM_COUNT,
            seed: None,
            min_room_size: MIN_ROOM_SIZE,
            max_room_size: MAX_ROOM_SIZE,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            treasure_chance: TREASURE_CHANCE,
        }
    }
}

impl GeneratorConfig {
    /// Default config for a grid of the given size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check every field; the first problem found is returned
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_room_size == 0 || self.min_room_size > self.max_room_size {
            return Err(ConfigError::RoomSizeRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(0.0..=1.0).contains(&self.treasure_chance) {
            return Err(ConfigError::TreasureChance(self.treasure_chance));
        }
        Ok(())
    }
}
