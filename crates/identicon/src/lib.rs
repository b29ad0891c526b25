//! # Identicon
//!
//! Deterministic, symmetric identicons derived from the SHA-256 digest of a
//! key.
//!
//! ## Overview
//!
//! - **Color**: the first three digest bytes, as opaque RGB
//! - **Pattern**: the remaining bits fill the left half of a square grid,
//!   least-significant bit first
//! - **Symmetry**: every filled cell is mirrored across the vertical center
//! - **Output**: an in-memory pixel buffer, or PNG bytes
//!
//! The same key, side and row count always produce identical pixels.
//!
//! ## Usage
//!
//! ```rust
//! use identicon::{Generator, IdenticonConfig};
//!
//! let generator = Generator::new(IdenticonConfig::new(250, 5)).unwrap();
//! let png = generator.render_png("user@example.com").unwrap();
//! assert_eq!(&png[1..4], b"PNG");
//!
//! // Or in one call
//! let same = identicon::generate_png(250, 5, "user@example.com").unwrap();
//! assert_eq!(png, same);
//! ```
//!
//! ## Re-exports
//!
//! - `identicon::core` - Pure derivation and rasterization primitives

pub mod config;
pub mod encode;
pub mod error;
pub mod generator;

// Re-export component crates
pub use identicon_core as core;

pub use config::IdenticonConfig;
pub use encode::{encode_png, to_rgba_image};
pub use error::{IdenticonError, Result};
pub use generator::{generate_png, Generator};

// Re-export commonly used core types
pub use identicon_core::{
    Color, CoreError, Digest, FillPattern, GridGeometry, Identicon, PixelBuffer,
};
