//! # Identicon Testkit
//!
//! Testing utilities for identicon derivation.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed keys with expected color, pattern and pixel digests
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Independent checks over rendered buffers
//!
//! ## Golden Vectors
//!
//! ```rust
//! use identicon_testkit::vectors::verify_all_vectors;
//!
//! for report in verify_all_vectors() {
//!     assert!(report.matches, "{}", report.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use identicon_testkit::generators::IdenticonParams;
//!
//! proptest! {
//!     #[test]
//!     fn render_is_deterministic(params: IdenticonParams) {
//!         prop_assert_eq!(params.build().render(), params.build().render());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{painted_squares, reference_render, Square};
pub use generators::IdenticonParams;
pub use vectors::{
    all_vectors, identicon_from_vector, pixel_digest, verify_all_vectors, GoldenVector,
};
