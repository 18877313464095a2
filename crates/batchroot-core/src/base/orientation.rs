//! Byte-per-flag encoding of proof orientation.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use super::{ParseError, strip_hex_prefix};

/// Number of orientation flags an [`EncodedOrientation`] can hold.
pub const MAX_ORIENTATION_FLAGS: usize = 32;

/// Orientation of a proof path packed into 32 bytes.
///
/// Byte `i` is `0x01` when the `i`-th sibling sits to the left of the path node and `0x00`
/// otherwise. Bytes past the proof length are `0x00`. This is one byte per level, not a bitmask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct EncodedOrientation([u8; MAX_ORIENTATION_FLAGS]);

impl EncodedOrientation {
    /// Wrap raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; MAX_ORIENTATION_FLAGS]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; MAX_ORIENTATION_FLAGS] {
        self.0
    }

    /// Read back the first `depth` flags (any non-zero byte counts as set).
    #[must_use]
    pub fn flags(&self, depth: usize) -> Vec<bool> {
        self.0.iter().take(depth).map(|byte| *byte != 0).collect()
    }
}

impl fmt::Display for EncodedOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for EncodedOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedOrientation({self})")
    }
}

impl FromStr for EncodedOrientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0_u8; MAX_ORIENTATION_FLAGS];
        hex::decode_to_slice(strip_hex_prefix(s.trim()), &mut bytes)
            .map_err(|_| ParseError::InvalidNode(s.to_owned()))?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_read_prefix() {
        let mut bytes = [0_u8; 32];
        bytes[1] = 1;
        let encoded = EncodedOrientation::from_bytes(bytes);
        assert_eq!(encoded.flags(3), vec![false, true, false]);
        assert!(encoded.flags(0).is_empty());
    }

    #[test]
    fn text_form_accepts_bare_hex() {
        let text = format!("01{}", "00".repeat(31));
        let encoded: EncodedOrientation = text.parse().expect("bare hex should parse");
        assert_eq!(encoded.to_string(), format!("0x{text}"));
    }
}
