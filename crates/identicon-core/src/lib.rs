//! # Identicon Core
//!
//! Pure primitives for deriving identicons from a key: hashing, color and
//! fill pattern extraction, grid geometry and rasterization.
//!
//! This crate contains no I/O and no encoding. It produces an in-memory
//! [`PixelBuffer`]; turning that into an image file is left to the caller.
//!
//! ## Key Types
//!
//! - [`Digest`] - SHA-256 digest of the key
//! - [`Color`] - Opaque color taken from the first three digest bytes
//! - [`FillPattern`] - Half-grid fill flags unpacked from the remaining bytes
//! - [`GridGeometry`] - Cell size, border and cell coordinates
//! - [`Identicon`] - The derived value, rendered with [`Identicon::render`]
//!
//! ## Bit Contract
//!
//! The mapping from digest bits to pixels is fixed. See [`pattern`] for the
//! bit order and [`geometry`] for the cell layout.

pub mod color;
pub mod digest;
pub mod error;
pub mod geometry;
pub mod identicon;
pub mod pattern;
pub mod raster;

pub use color::Color;
pub use digest::{Digest, COLOR_BYTES, DIGEST_LEN};
pub use error::CoreError;
pub use geometry::{cell_origin, mirror_origin, GridGeometry};
pub use identicon::Identicon;
pub use pattern::{fill_pattern, half_grid_cell_count, FillPattern};
pub use raster::{render, PixelBuffer};
