//! Flat tagged grid
//!
//! Cells are stored row-major at `y * width + x`. Every accessor checks
//! bounds first; reads outside the grid return `None` and writes return
//! [`LayoutError::OutOfBounds`].

use serde::{Deserialize, Serialize};

use super::cell::{CellTag, Direction};
use super::room::Position;
use crate::error::LayoutError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellTag>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellTag::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reset every cell to empty, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(CellTag::Empty);
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Flat index of `(x, y)`, if it is on the grid
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        self.in_bounds(x, y).then(|| y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<CellTag> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn at(&self, pos: Position) -> Option<CellTag> {
        self.get(pos.x, pos.y)
    }

    pub fn set(&mut self, x: usize, y: usize, tag: CellTag) -> Result<(), LayoutError> {
        let idx = self.index(x, y).ok_or(LayoutError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.cells[idx] = tag;
        Ok(())
    }

    pub fn set_at(&mut self, pos: Position, tag: CellTag) -> Result<(), LayoutError> {
        self.set(pos.x, pos.y, tag)
    }

    /// Tag of the neighbour one step away, `None` past the edge
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<CellTag> {
        pos.step(dir, self.width, self.height)
            .and_then(|next| self.at(next))
    }

    /// Count cells holding `tag`
    pub fn count(&self, tag: CellTag) -> usize {
        self.cells.iter().filter(|&&c| c == tag).count()
    }

    /// Count cells matching a predicate
    pub fn count_where(&self, pred: impl Fn(CellTag) -> bool) -> usize {
        self.cells.iter().filter(|&&c| pred(c)).count()
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[CellTag] {
        &self.cells
    }

    /// Iterate `(position, tag)` pairs row by row
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellTag)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &tag)| (Position::new(idx % self.width, idx / self.width), tag))
    }

    /// Raw tag values, the format handed to renderers
    pub fn as_raw(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.value()).collect()
    }

    /// Rebuild a grid from raw tag values
    ///
    /// Returns `None` if the length does not match or a value is not a tag.
    pub fn from_raw(width: usize, height: usize, raw: &[u8]) -> Option<Self> {
        if raw.len() != width * height {
            return None;
        }
        let cells = raw
            .iter()
            .map(|&v| CellTag::from_u8(v))
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            width,
            height,
            cells,
        })
    }
}
