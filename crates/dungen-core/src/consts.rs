//! Default generation parameters
//!
//! Every one of them can be overridden through
//! [`GeneratorConfig`](crate::GeneratorConfig).

/// Grid dimensions
pub const DEFAULT_WIDTH: usize = 30;
pub const DEFAULT_HEIGHT: usize = 30;

/// World units per grid cell (used by renderers only)
pub const DEFAULT_CELL_SIZE: f32 = 100.0;

/// Number of rooms the placer tries to fit
pub const DEFAULT_ROOM_COUNT: usize = 10;

/// Room side length range, inclusive
pub const MIN_ROOM_SIZE: usize = 4;
pub const MAX_ROOM_SIZE: usize = 5;

/// Placement re-rolls allowed per room before it is skipped
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Probability that a room receives a treasure marker
pub const TREASURE_CHANCE: f64 = 0.5;
