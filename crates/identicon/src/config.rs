//! Generator configuration.

use identicon_core::{half_grid_cell_count, Digest, GridGeometry};
use serde::{Deserialize, Serialize};

use crate::error::{IdenticonError, Result};

/// Configuration for a [`Generator`](crate::Generator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdenticonConfig {
    /// Image side length in pixels.
    pub side: u32,
    /// Grid side length in cells.
    pub row_count: u32,
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self {
            side: 250,
            row_count: 5,
        }
    }
}

impl IdenticonConfig {
    pub fn new(side: u32, row_count: u32) -> Self {
        Self { side, row_count }
    }

    pub fn with_side(mut self, side: u32) -> Self {
        self.side = side;
        self
    }

    pub fn with_row_count(mut self, row_count: u32) -> Self {
        self.row_count = row_count;
        self
    }

    /// Largest row count whose half-grid fits in the digest's pattern bits.
    pub fn max_row_count() -> u32 {
        let mut row_count = 1;
        while half_grid_cell_count(row_count + 1) <= Digest::pattern_bits() {
            row_count += 1;
        }
        row_count as u32
    }

    /// Check that the configuration describes a drawable identicon.
    pub fn validate(&self) -> Result<GridGeometry> {
        if self.row_count > Self::max_row_count() {
            return Err(IdenticonError::InvalidConfig(format!(
                "row count {} exceeds maximum of {}",
                self.row_count,
                Self::max_row_count()
            )));
        }
        GridGeometry::new(self.side, self.row_count)
            .map_err(|e| IdenticonError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IdenticonConfig::default();
        assert_eq!(config, IdenticonConfig::new(250, 5));
        let geometry = config.validate().unwrap();
        assert_eq!(geometry.cell_size(), 50);
    }

    #[test]
    fn test_max_row_count() {
        assert_eq!(IdenticonConfig::max_row_count(), 21);
    }

    #[test]
    fn test_validate_rejects() {
        let too_many_rows = IdenticonConfig::default().with_side(1000).with_row_count(22);
        assert!(matches!(
            too_many_rows.validate(),
            Err(IdenticonError::InvalidConfig(_))
        ));

        let zero_rows = IdenticonConfig::default().with_row_count(0);
        assert!(zero_rows.validate().is_err());

        let too_small = IdenticonConfig::new(3, 5);
        assert!(too_small.validate().is_err());
    }

    #[test]
    fn test_config_serde() {
        let config: IdenticonConfig = serde_json::from_str(r#"{"side": 128}"#).unwrap();
        assert_eq!(config, IdenticonConfig::new(128, 5));

        let json = serde_json::to_string(&IdenticonConfig::new(64, 8)).unwrap();
        let recovered: IdenticonConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, IdenticonConfig::new(64, 8));
    }
}
