//! Rasterization of an identicon into a pixel buffer.

use crate::color::Color;
use crate::geometry::GridGeometry;
use crate::pattern::FillPattern;

/// A square buffer of pixels, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    side: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a `side × side` buffer filled with `color`.
    pub fn new(side: u32, color: Color) -> Self {
        let len = side as usize * side as usize;
        Self {
            side,
            pixels: vec![color; len],
        }
    }

    /// Side length in pixels.
    pub const fn side(&self) -> u32 {
        self.side
    }

    /// The pixel at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.side || y >= self.side {
            return None;
        }
        self.pixels.get(self.offset(x, y)).copied()
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Paint a `size × size` square with its top-left corner at `(x, y)`.
    ///
    /// Pixels that would fall outside the buffer are skipped.
    pub fn fill_square(&mut self, x: u32, y: u32, size: u32, color: Color) {
        let x_end = x.saturating_add(size).min(self.side);
        let y_end = y.saturating_add(size).min(self.side);
        if x >= x_end {
            return;
        }
        for row in y..y_end {
            let start = self.offset(x, row);
            let end = start + (x_end - x) as usize;
            self.pixels[start..end].fill(color);
        }
    }

    /// Rows of pixels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.pixels.chunks(self.side.max(1) as usize)
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Number of pixels equal to `color`.
    pub fn count_pixels(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel == color).count()
    }

    /// Row-major RGBA8 bytes, four per pixel.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|pixel| pixel.to_rgba()).collect()
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.side as usize + x as usize
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("side", &self.side)
            .field("pixels", &self.pixels.len())
            .finish()
    }
}

/// Draw `pattern` in `color` over a white background.
///
/// Each filled half-grid cell is drawn at its origin and again at its
/// horizontal mirror, unless the mirror coincides with the cell itself.
pub fn render(geometry: &GridGeometry, color: Color, pattern: &FillPattern) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(geometry.side(), Color::WHITE);
    let cell_size = geometry.cell_size();

    for index in pattern.filled_indices() {
        let (x, y) = geometry.cell_origin(index as u32);
        buffer.fill_square(x, y, cell_size, color);

        let (x_mirror, y_mirror) = geometry.mirror_origin(x, y);
        if x_mirror != x {
            buffer.fill_square(x_mirror, y_mirror, cell_size, color);
        }
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_uniform() {
        let buffer = PixelBuffer::new(4, Color::WHITE);
        assert_eq!(buffer.side(), 4);
        assert_eq!(buffer.count_pixels(Color::WHITE), 16);
        assert_eq!(buffer.get(3, 3), Some(Color::WHITE));
        assert_eq!(buffer.get(4, 0), None);
    }

    #[test]
    fn test_fill_square() {
        let red = Color::rgb(255, 0, 0);
        let mut buffer = PixelBuffer::new(10, Color::WHITE);
        buffer.fill_square(2, 3, 4, red);

        assert_eq!(buffer.count_pixels(red), 16);
        assert_eq!(buffer.get(2, 3), Some(red));
        assert_eq!(buffer.get(5, 6), Some(red));
        assert_eq!(buffer.get(6, 6), Some(Color::WHITE));
        assert_eq!(buffer.get(5, 7), Some(Color::WHITE));
        assert_eq!(buffer.get(1, 3), Some(Color::WHITE));
    }

    #[test]
    fn test_fill_square_clamps_to_buffer() {
        let red = Color::rgb(255, 0, 0);
        let mut buffer = PixelBuffer::new(10, Color::WHITE);
        buffer.fill_square(8, 8, 4, red);
        assert_eq!(buffer.count_pixels(red), 4);

        buffer.fill_square(12, 0, 4, red);
        assert_eq!(buffer.count_pixels(red), 4);
    }

    #[test]
    fn test_rgba_bytes_row_major() {
        let red = Color::rgb(255, 0, 0);
        let mut buffer = PixelBuffer::new(2, Color::WHITE);
        buffer.fill_square(1, 0, 1, red);

        assert_eq!(
            buffer.to_rgba_bytes(),
            vec![255, 255, 255, 255, 255, 0, 0, 255, 255, 255, 255, 255, 255, 255, 255, 255]
        );
        assert_eq!(buffer.rows().count(), 2);
    }

    #[test]
    fn test_render_mirrors_cells() {
        let color = Color::rgb(10, 20, 30);
        let geometry = GridGeometry::new(30, 3).unwrap();
        // 3 rows, 2 half-grid columns: cell 0 = (col 0, row 0), cell 4 = (col 1, row 1)
        let pattern = FillPattern::from(vec![true, false, false, false, true, false]);

        let buffer = render(&geometry, color, &pattern);

        assert_eq!(buffer.get(0, 0), Some(color));
        assert_eq!(buffer.get(20, 0), Some(color));
        assert_eq!(buffer.get(10, 10), Some(color));
        assert_eq!(buffer.get(10, 0), Some(Color::WHITE));
        // two mirrored cells plus one center cell
        assert_eq!(buffer.count_pixels(color), 3 * 100);
    }

    #[test]
    fn test_render_empty_pattern_is_white() {
        let geometry = GridGeometry::new(20, 4).unwrap();
        let pattern = FillPattern::from(vec![false; 8]);
        let buffer = render(&geometry, Color::rgb(1, 2, 3), &pattern);
        assert_eq!(buffer.count_pixels(Color::WHITE), 400);
    }
}
