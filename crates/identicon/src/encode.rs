//! PNG encoding of pixel buffers.

use std::io::Cursor;

use identicon_core::PixelBuffer;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::Result;

/// Copy a pixel buffer into an [`RgbaImage`].
pub fn to_rgba_image(buffer: &PixelBuffer) -> RgbaImage {
    let side = buffer.side();
    let pixels = buffer.pixels();
    RgbaImage::from_fn(side, side, |x, y| {
        Rgba(pixels[y as usize * side as usize + x as usize].to_rgba())
    })
}

/// Encode a pixel buffer as a lossless RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let image = to_rgba_image(buffer);
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    tracing::trace!(side = buffer.side(), png_bytes = bytes.len(), "encoded png");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use identicon_core::{Color, Identicon};

    #[test]
    fn test_png_signature() {
        let buffer = PixelBuffer::new(8, Color::WHITE);
        let png = encode_png(&buffer).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_png_decodes_to_same_pixels() {
        let buffer = Identicon::new(100, 7, "identicon").unwrap().render();
        let png = encode_png(&buffer).unwrap();

        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded.dimensions(), (100, 100));
        assert_eq!(decoded.into_raw(), buffer.to_rgba_bytes());
    }

    #[test]
    fn test_rgba_image_pixels() {
        let color = Color::rgb(1, 2, 3);
        let mut buffer = PixelBuffer::new(4, Color::WHITE);
        buffer.fill_square(2, 0, 2, color);

        let image = to_rgba_image(&buffer);
        assert_eq!(image.get_pixel(3, 1).0, [1, 2, 3, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }
}
