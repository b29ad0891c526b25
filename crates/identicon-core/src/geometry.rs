//! Pixel geometry of the identicon grid.
//!
//! All arithmetic is integer floor division. The border is applied on all
//! four sides; when `side` is not a multiple of `row_count` the leftover
//! margin may be uneven and is left as is.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::pattern::half_grid_cell_count;

/// Pixel origin of the half-grid cell at `index`.
///
/// Cells are numbered column-major: `index % row_count` is the row and
/// `index / row_count` the column.
pub const fn cell_origin(index: u32, border: u32, cell_size: u32, row_count: u32) -> (u32, u32) {
    let row = index % row_count;
    let column = index / row_count;
    (border + cell_size * column, border + cell_size * row)
}

/// Horizontal mirror of a cell origin across the vertical center line.
///
/// For the center column of an odd-width grid the result equals `x`.
pub const fn mirror_origin(x: u32, y: u32, side: u32, cell_size: u32) -> (u32, u32) {
    (side - x - cell_size, y)
}

/// Geometry of an identicon image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridGeometry {
    side: u32,
    row_count: u32,
    cell_size: u32,
    border: u32,
}

impl GridGeometry {
    /// Compute the geometry of a `side × side` image split into
    /// `row_count × row_count` cells.
    pub fn new(side: u32, row_count: u32) -> Result<Self, CoreError> {
        if side == 0 {
            return Err(CoreError::InvalidGeometry("side must be positive".into()));
        }
        if row_count == 0 {
            return Err(CoreError::InvalidGeometry("row count must be positive".into()));
        }
        if side < row_count {
            return Err(CoreError::InvalidGeometry(format!(
                "side {side} is smaller than row count {row_count}"
            )));
        }

        let cell_size = side / row_count;
        let border = (side - cell_size * row_count) / 2;

        Ok(Self {
            side,
            row_count,
            cell_size,
            border,
        })
    }

    /// Image side length in pixels.
    pub const fn side(&self) -> u32 {
        self.side
    }

    /// Grid side length in cells.
    pub const fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Cell side length in pixels.
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Empty margin around the grid, in pixels.
    pub const fn border(&self) -> u32 {
        self.border
    }

    /// Number of cells in the half-grid.
    pub const fn cell_count(&self) -> usize {
        half_grid_cell_count(self.row_count as usize)
    }

    /// Whether the grid covers the image without leftover margin.
    pub const fn is_evenly_divided(&self) -> bool {
        self.side % self.row_count == 0
    }

    /// Pixel origin of the half-grid cell at `index`.
    pub const fn cell_origin(&self, index: u32) -> (u32, u32) {
        cell_origin(index, self.border, self.cell_size, self.row_count)
    }

    /// Mirrored origin of a cell at `(x, y)`.
    pub const fn mirror_origin(&self, x: u32, y: u32) -> (u32, u32) {
        mirror_origin(x, y, self.side, self.cell_size)
    }
}
