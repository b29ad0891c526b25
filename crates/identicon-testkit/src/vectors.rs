//! Golden test vectors for deterministic verification.
//!
//! Each vector pins the color, the fill pattern and the SHA-256 of the
//! rendered RGBA pixels for a fixed `(side, row_count, key)`. Any change in
//! bit order, cell layout or mirroring shows up here.

use identicon_core::{CoreError, Identicon, PixelBuffer};
use serde::Serialize;
use sha2::{Digest as _, Sha256};

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Key the identicon is derived from.
    pub key: &'static str,
    /// Image side length in pixels.
    pub side: u32,
    /// Grid side length in cells.
    pub row_count: u32,
    /// Expected color as six hex digits.
    pub expected_color: &'static str,
    /// Expected fill pattern, one `'1'`/`'0'` per half-grid cell.
    pub expected_pattern: &'static str,
    /// Expected SHA-256 (hex) of the row-major RGBA pixel bytes.
    pub expected_pixels: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "test key, 5x5 grid",
            key: "test",
            side: 250,
            row_count: 5,
            expected_color: "9f86d0",
            expected_pattern: "100000010001000",
            expected_pixels: "a40dc862eb48e38a32471b651911a6ca6edc3b33c477f5c1961b9aaec39d952d",
        },
        GoldenVector {
            name: "empty key",
            key: "",
            side: 250,
            row_count: 5,
            expected_color: "e3b0c4",
            expected_pattern: "010000100001100",
            expected_pixels: "b79fc06a57221c089f382bb781a55549e635fb0e4b1b14c15f59799ba533e804",
        },
        GoldenVector {
            name: "even grid",
            key: "hello world",
            side: 128,
            row_count: 4,
            expected_color: "b94d27",
            expected_pattern: "10011101",
            expected_pixels: "2edbd66b13798f62b6ea255780b42ee2672293ed78336fcde3a9e254e718c084",
        },
        GoldenVector {
            name: "uneven side with border",
            key: "identicon",
            side: 100,
            row_count: 7,
            expected_color: "90e35a",
            expected_pattern: "0010110100100110011001001111",
            expected_pixels: "a368f130c8510085cf2efef89347b3a44772c977ae055b4bdf1e028d3b1b5e23",
        },
        GoldenVector {
            name: "pattern spans four bytes",
            key: "alice@example.com",
            side: 64,
            row_count: 8,
            expected_color: "ff8d98",
            expected_pattern: "10011000001111110111000001001000",
            expected_pixels: "410196a9eca32ff1730f24c5682d9d87eda36d8cd36aac208090015613a52e2f",
        },
        GoldenVector {
            name: "six rows",
            key: "bob",
            side: 420,
            row_count: 6,
            expected_color: "81b637",
            expected_pattern: "000110110011111101",
            expected_pixels: "8ef382e2926ccca32bf3afa1a61d6d3fe61742a6fefff50d7af63c04fc41796d",
        },
    ]
}

/// Derive the identicon described by a vector.
pub fn identicon_from_vector(vector: &GoldenVector) -> Result<Identicon, CoreError> {
    Identicon::new(vector.side, vector.row_count, vector.key)
}

/// SHA-256 (hex) of a buffer's row-major RGBA bytes.
pub fn pixel_digest(buffer: &PixelBuffer) -> String {
    hex::encode(Sha256::digest(buffer.to_rgba_bytes()))
}

/// Result of checking one golden vector.
#[derive(Debug, Clone, Serialize)]
pub struct VectorReport {
    pub name: String,
    pub matches: bool,
    pub color: String,
    pub pattern: String,
    pub pixels: String,
}

/// Check every golden vector against this implementation.
pub fn verify_all_vectors() -> Vec<VectorReport> {
    all_vectors()
        .iter()
        .map(|v| match identicon_from_vector(v) {
            Ok(icon) => {
                let color = icon.color().to_hex();
                let pattern = icon.pattern().to_bit_string();
                let pixels = pixel_digest(&icon.render());
                let matches = color == v.expected_color
                    && pattern == v.expected_pattern
                    && pixels == v.expected_pixels;
                VectorReport {
                    name: v.name.to_string(),
                    matches,
                    color,
                    pattern,
                    pixels,
                }
            }
            Err(e) => VectorReport {
                name: v.name.to_string(),
                matches: false,
                color: String::new(),
                pattern: String::new(),
                pixels: e.to_string(),
            },
        })
        .collect()
}

/// All vectors as pretty-printed JSON.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}
