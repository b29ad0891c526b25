//! Color extraction from digest bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::digest::COLOR_BYTES;
use crate::error::CoreError;

/// An opaque RGBA color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque white, the identicon background.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Derive a color from the first three bytes, taken as (R, G, B).
    ///
    /// Extra bytes are ignored. Alpha is always fully opaque.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        match bytes {
            [r, g, b, ..] => Ok(Self::rgb(*r, *g, *b)),
            _ => Err(CoreError::InsufficientBytes {
                needed: COLOR_BYTES,
                got: bytes.len(),
            }),
        }
    }

    /// Components as an `[r, g, b, a]` array.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// RGB as six lowercase hex digits.
    pub fn to_hex(self) -> String {
        hex::encode([self.r, self.g, self.b])
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{}, a={})", self.to_hex(), self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_bytes() {
        let color = Color::from_bytes(&[0, 100, 200]).unwrap();
        assert_eq!(color.to_rgba(), [0, 100, 200, 255]);
    }

    #[test]
    fn test_color_ignores_extra_bytes() {
        let color = Color::from_bytes(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(color, Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_color_insufficient_bytes() {
        assert_eq!(
            Color::from_bytes(&[0]),
            Err(CoreError::InsufficientBytes { needed: 3, got: 1 })
        );
        assert!(Color::from_bytes(&[]).is_err());
        assert!(Color::from_bytes(&[1, 2]).is_err());
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::rgb(159, 134, 208).to_hex(), "9f86d0");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn test_color_serde() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":255}"#);
        let recovered: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, Color::rgb(1, 2, 3));
    }
}
