//! 20-byte account addresses.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use super::{ParseError, keccak256, strip_hex_prefix};

/// Size of an address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// A 20-byte account address.
///
/// Parsing accepts 40 hex digits in any case, with or without `0x`; the checksum case is not
/// validated. Display uses the EIP-55 checksum form.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// The all-zero address, used by padding claims.
    pub const ZERO: Self = Self([0_u8; ADDRESS_SIZE]);

    /// Wrap raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    /// EIP-55 mixed-case checksum encoding, `0x` prefixed.
    #[must_use]
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(&[lower.as_bytes()]);

        let mut out = String::with_capacity(ADDRESS_SIZE.saturating_mul(2).saturating_add(2));
        out.push_str("0x");
        for (pair, hash_byte) in lower.as_bytes().chunks(2).zip(hash) {
            for (digit, nibble) in pair.iter().zip([hash_byte >> 4_u8, hash_byte & 0x0f]) {
                let c = char::from(*digit);
                out.push(if nibble >= 8 {
                    c.to_ascii_uppercase()
                } else {
                    c
                });
            }
        }
        out
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0_u8; ADDRESS_SIZE];
        hex::decode_to_slice(strip_hex_prefix(s.trim()), &mut bytes)
            .map_err(|_| ParseError::InvalidAddress(s.to_owned()))?;
        Ok(Self(bytes))
    }
}
