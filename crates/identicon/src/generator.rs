//! The Generator: configured entry point for producing identicons.
//!
//! A generator validates its configuration once and then derives, renders
//! and encodes identicons for any number of keys.

use identicon_core::{Digest, GridGeometry, Identicon, PixelBuffer};

use crate::config::IdenticonConfig;
use crate::encode::encode_png;
use crate::error::Result;

/// Produces identicons of a fixed size and grid.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Generator {
    config: IdenticonConfig,
    geometry: GridGeometry,
}

impl Generator {
    /// Create a generator, rejecting configurations that cannot be drawn.
    pub fn new(config: IdenticonConfig) -> Result<Self> {
        let geometry = config.validate()?;

        if !geometry.is_evenly_divided() {
            tracing::warn!(
                side = config.side,
                row_count = config.row_count,
                border = geometry.border(),
                "side is not a multiple of row count, margins will be uneven"
            );
        }
        tracing::debug!(
            side = config.side,
            row_count = config.row_count,
            cell_size = geometry.cell_size(),
            border = geometry.border(),
            "created identicon generator"
        );

        Ok(Self { config, geometry })
    }

    pub fn config(&self) -> &IdenticonConfig {
        &self.config
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derivation
    // ─────────────────────────────────────────────────────────────────────────

    /// Derive the identicon for `key`.
    pub fn identicon(&self, key: impl AsRef<[u8]>) -> Result<Identicon> {
        let key = key.as_ref();
        let icon = Identicon::from_digest(self.geometry, &Digest::hash(key))?;

        tracing::debug!(
            key_len = key.len(),
            color = %icon.color(),
            filled = icon.pattern().filled_count(),
            cells = icon.pattern().len(),
            "derived identicon"
        );

        Ok(icon)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Render the identicon for `key` into a pixel buffer.
    pub fn render(&self, key: impl AsRef<[u8]>) -> Result<PixelBuffer> {
        Ok(self.identicon(key)?.render())
    }

    /// Render the identicon for `key` as PNG bytes.
    pub fn render_png(&self, key: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        encode_png(&self.render(key)?)
    }
}

/// Render a `side × side` PNG identicon with a `row_count × row_count` grid.
pub fn generate_png(side: u32, row_count: u32, key: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    Generator::new(IdenticonConfig::new(side, row_count))?.render_png(key)
}
