//! Half-grid fill pattern extraction.
//!
//! Bits are unpacked least-significant first within each byte, bytes in
//! order. One bit per half-grid cell; `1` means filled. Extraction stops
//! exactly at the requested cell count, even in the middle of a byte.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of half-grid cells for a grid with `row_count` rows.
///
/// Half the columns, rounded up, times the row count. The odd center column
/// is included.
pub const fn half_grid_cell_count(row_count: usize) -> usize {
    row_count * (row_count / 2 + row_count % 2)
}

/// Unpack up to `cell_count` fill flags from `bytes`.
///
/// Returns `min(cell_count, 8 * bytes.len())` flags. A short input yields a
/// short pattern; it is never padded.
pub fn fill_pattern(bytes: &[u8], cell_count: usize) -> Vec<bool> {
    let mut cells = Vec::with_capacity(cell_count.min(bytes.len() * 8));

    'bytes: for mut byte in bytes.iter().copied() {
        for _ in 0..8 {
            if cells.len() == cell_count {
                break 'bytes;
            }
            cells.push(byte & 1 == 1);
            byte >>= 1;
        }
    }

    cells
}

/// Fill flags for the half-grid, in column-major cell order.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FillPattern(Vec<bool>);

impl FillPattern {
    /// Extract a pattern of `cell_count` cells from `bytes`.
    pub fn from_bytes(bytes: &[u8], cell_count: usize) -> Self {
        Self(fill_pattern(bytes, cell_count))
    }

    /// Number of cells in the pattern.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the cell at `index` is filled.
    pub fn is_filled(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|&&filled| filled).count()
    }

    /// Indices of filled cells, ascending.
    pub fn filled_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, &filled)| filled.then_some(index))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// One character per cell: `'1'` filled, `'0'` empty.
    pub fn to_bit_string(&self) -> String {
        self.0.iter().map(|&filled| if filled { '1' } else { '0' }).collect()
    }
}

impl fmt::Debug for FillPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FillPattern({})", self.to_bit_string())
    }
}

impl From<Vec<bool>> for FillPattern {
    fn from(cells: Vec<bool>) -> Self {
        Self(cells)
    }
}
