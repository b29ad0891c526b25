//! Test fixtures and helpers.
//!
//! Independent checks over rendered buffers, used by property and
//! integration tests.

use identicon_core::{Color, GridGeometry, Identicon, PixelBuffer};

/// A square drawn by the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl Square {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.size && y >= self.y && y < self.y + self.size
    }
}

/// Every square an identicon paints, mirrors included.
pub fn painted_squares(icon: &Identicon) -> Vec<Square> {
    let geometry = icon.geometry();
    let size = geometry.cell_size();
    let mut squares = Vec::new();

    for index in icon.pattern().filled_indices() {
        let (x, y) = geometry.cell_origin(index as u32);
        squares.push(Square { x, y, size });

        let (x_mirror, y_mirror) = geometry.mirror_origin(x, y);
        if x_mirror != x {
            squares.push(Square {
                x: x_mirror,
                y: y_mirror,
                size,
            });
        }
    }

    squares
}

/// Render pixel by pixel from the list of painted squares.
///
/// Slow, but shares nothing with the rasterizer beyond geometry.
pub fn reference_render(icon: &Identicon) -> PixelBuffer {
    let side = icon.geometry().side();
    let squares = painted_squares(icon);
    let mut buffer = PixelBuffer::new(side, Color::WHITE);

    for y in 0..side {
        for x in 0..side {
            if squares.iter().any(|square| square.contains(x, y)) {
                buffer.fill_square(x, y, 1, icon.color());
            }
        }
    }

    buffer
}

/// Whether every cell origin of the half-grid lies inside the image.
pub fn origins_in_bounds(geometry: &GridGeometry) -> bool {
    let max = geometry.side() - geometry.cell_size();
    (0..geometry.cell_count() as u32).all(|index| {
        let (x, y) = geometry.cell_origin(index);
        let (x_mirror, _) = geometry.mirror_origin(x, y);
        x <= max && y <= max && x_mirror <= max
    })
}

/// Whether the buffer only contains white and `color`.
pub fn is_two_tone(buffer: &PixelBuffer, color: Color) -> bool {
    buffer
        .pixels()
        .iter()
        .all(|&pixel| pixel == Color::WHITE || pixel == color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_painted_squares_test_key() {
        let icon = Identicon::new(250, 5, "test").unwrap();
        let squares = painted_squares(&icon);
        assert_eq!(
            squares,
            vec![
                Square { x: 0, y: 0, size: 50 },
                Square { x: 200, y: 0, size: 50 },
                Square { x: 50, y: 100, size: 50 },
                Square { x: 150, y: 100, size: 50 },
                Square { x: 100, y: 50, size: 50 },
            ]
        );
    }

    #[test]
    fn test_reference_render_matches() {
        let icon = Identicon::new(40, 5, "fixture").unwrap();
        assert_eq!(reference_render(&icon), icon.render());
    }

    #[test]
    fn test_origins_in_bounds() {
        assert!(origins_in_bounds(&GridGeometry::new(100, 7).unwrap()));
        assert!(origins_in_bounds(&GridGeometry::new(5, 5).unwrap()));
    }

    #[test]
    fn test_two_tone() {
        let icon = Identicon::new(64, 8, "two tone").unwrap();
        assert!(is_two_tone(&icon.render(), icon.color()));
    }
}
