//! The identicon value: color, fill pattern and geometry derived from a key.

use crate::color::Color;
use crate::digest::Digest;
use crate::error::CoreError;
use crate::geometry::GridGeometry;
use crate::pattern::FillPattern;
use crate::raster::{render, PixelBuffer};

/// An identicon derived from a key.
///
/// Immutable once constructed. [`Identicon::render`] can be called any number
/// of times, from any thread, and always yields the same pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identicon {
    geometry: GridGeometry,
    color: Color,
    pattern: FillPattern,
}

impl Identicon {
    /// Derive a `side × side` identicon with a `row_count × row_count` grid
    /// from the SHA-256 digest of `key`.
    pub fn new(side: u32, row_count: u32, key: impl AsRef<[u8]>) -> Result<Self, CoreError> {
        let geometry = GridGeometry::new(side, row_count)?;
        Self::from_digest(geometry, &Digest::hash(key.as_ref()))
    }

    /// Derive an identicon from an already computed digest.
    pub fn from_digest(geometry: GridGeometry, digest: &Digest) -> Result<Self, CoreError> {
        let cell_count = geometry.cell_count();
        if cell_count > Digest::pattern_bits() {
            return Err(CoreError::InsufficientPatternBytes {
                needed: cell_count,
                available: Digest::pattern_bits(),
            });
        }

        let color = Color::from_bytes(digest.color_bytes())?;
        let pattern = FillPattern::from_bytes(digest.pattern_bytes(), cell_count);

        Ok(Self {
            geometry,
            color,
            pattern,
        })
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn pattern(&self) -> &FillPattern {
        &self.pattern
    }

    /// Rasterize into a fresh pixel buffer.
    pub fn render(&self) -> PixelBuffer {
        render(&self.geometry, self.color, &self.pattern)
    }
}
