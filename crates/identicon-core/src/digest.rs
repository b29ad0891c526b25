//! SHA-256 digest of an identicon key.
//!
//! The first [`COLOR_BYTES`] bytes select the color, the remaining bytes feed
//! the fill pattern.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;

/// Length of a digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Number of leading digest bytes consumed by the color.
pub const COLOR_BYTES: usize = 3;

/// A 32-byte SHA-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    /// Compute the SHA-256 digest of the given key.
    pub fn hash(key: &[u8]) -> Self {
        Self(Sha256::digest(key).into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Bytes that determine the color (R, G, B).
    pub fn color_bytes(&self) -> &[u8] {
        &self.0[..COLOR_BYTES]
    }

    /// Bytes that determine the fill pattern.
    pub fn pattern_bytes(&self) -> &[u8] {
        &self.0[COLOR_BYTES..]
    }

    /// Number of fill bits available after the color bytes.
    pub const fn pattern_bits() -> usize {
        (DIGEST_LEN - COLOR_BYTES) * 8
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != DIGEST_LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha256({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        let digest = Digest::hash(b"test");
        assert_eq!(
            digest.to_hex(),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_empty_key() {
        let digest = Digest::hash(b"");
        assert_eq!(
            digest.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_deterministic() {
        let h1 = Digest::hash(b"alice");
        let h2 = Digest::hash(b"alice");
        assert_eq!(h1, h2);
        assert_ne!(h1, Digest::hash(b"bob"));
    }

    #[test]
    fn test_split() {
        let digest = Digest::hash(b"test");
        assert_eq!(digest.color_bytes(), &[159, 134, 208]);
        assert_eq!(digest.pattern_bytes().len(), 29);
        assert_eq!(digest.pattern_bytes()[0], 129);
        assert_eq!(Digest::pattern_bits(), 232);
    }

    #[test]
    fn test_hex_roundtrip() {
        let digest = Digest::hash(b"roundtrip");
        let recovered = Digest::from_hex(&digest.to_hex()).unwrap();
        assert_eq!(digest, recovered);
        assert!(Digest::from_hex("abcd").is_err());
    }
}
