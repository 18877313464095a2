//! 256-bit unsigned integers as they appear in claim batches.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use super::ParseError;

const UINT256_BITS: u64 = 256;
const UINT256_BYTES: usize = 32;

/// An unsigned 256-bit integer stored as 32 big-endian bytes.
///
/// Parses from a decimal string or a `0x`-prefixed hex string. Displays as minimal `0x` hex
/// (`0x0` for zero).
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Uint256([u8; UINT256_BYTES]);

impl Uint256 {
    /// Zero.
    pub const ZERO: Self = Self([0_u8; UINT256_BYTES]);

    /// Wrap 32 big-endian bytes.
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; UINT256_BYTES]) -> Self {
        Self(bytes)
    }

    /// The 32 big-endian bytes.
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; UINT256_BYTES] {
        self.0
    }

    /// Decimal representation.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        BigUint::from_bytes_be(&self.0).to_str_radix(10)
    }

    fn from_biguint(value: &BigUint, text: &str) -> Result<Self, ParseError> {
        if value.bits() > UINT256_BITS {
            return Err(ParseError::IntegerOverflow(text.to_owned()));
        }
        let be = value.to_bytes_be();
        let mut bytes = [0_u8; UINT256_BYTES];
        let offset = UINT256_BYTES
            .checked_sub(be.len())
            .ok_or_else(|| ParseError::IntegerOverflow(text.to_owned()))?;
        bytes
            .get_mut(offset..)
            .ok_or_else(|| ParseError::IntegerOverflow(text.to_owned()))?
            .copy_from_slice(&be);
        Ok(Self(bytes))
    }
}

impl From<u64> for Uint256 {
    fn from(value: u64) -> Self {
        let mut bytes = [0_u8; UINT256_BYTES];
        if let Some(tail) = bytes.get_mut(UINT256_BYTES.saturating_sub(8)..) {
            tail.copy_from_slice(&value.to_be_bytes());
        }
        Self(bytes)
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", BigUint::from_bytes_be(&self.0).to_str_radix(16))
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({self})")
    }
}

impl FromStr for Uint256 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (digits, radix) = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => (hex, 16),
            None => (trimmed, 10),
        };
        let well_formed = match radix {
            16 => digits.bytes().all(|b| b.is_ascii_hexdigit()),
            _ => digits.bytes().all(|b| b.is_ascii_digit()),
        };
        // parse_bytes would skip `_` separators and accept a sign.
        if digits.is_empty() || !well_formed {
            return Err(ParseError::InvalidInteger(s.to_owned()));
        }
        let value = BigUint::parse_bytes(digits.as_bytes(), radix)
            .ok_or_else(|| ParseError::InvalidInteger(s.to_owned()))?;
        Self::from_biguint(&value, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_DECIMAL: &str =
        "115792089237316195423570985008687907853269984665640564039457584007913129639935";

    #[test]
    fn parse_decimal() {
        let value: Uint256 = "30".parse().expect("decimal should parse");
        assert_eq!(value, Uint256::from(30));
        assert_eq!(value.to_string(), "0x1e");
        assert_eq!(value.to_decimal(), "30");
    }

    #[test]
    fn parse_hex() {
        let value: Uint256 = "0x1e".parse().expect("hex should parse");
        assert_eq!(value, Uint256::from(30));
    }

    #[test]
    fn zero_displays_as_0x0() {
        assert_eq!(Uint256::ZERO.to_string(), "0x0");
        assert_eq!("0".parse::<Uint256>(), Ok(Uint256::ZERO));
    }

    #[test]
    fn max_value_fits() {
        let value: Uint256 = MAX_DECIMAL.parse().expect("2^256 - 1 should parse");
        assert_eq!(value.to_be_bytes(), [0xff_u8; 32]);
        assert_eq!(value.to_decimal(), MAX_DECIMAL);
    }

    #[test]
    fn overflow_is_rejected() {
        let too_big = "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert!(matches!(
            too_big.parse::<Uint256>(),
            Err(ParseError::IntegerOverflow(_))
        ));
        let too_wide_hex = format!("0x1{}", "0".repeat(64));
        assert!(matches!(
            too_wide_hex.parse::<Uint256>(),
            Err(ParseError::IntegerOverflow(_))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        for bad in [
            "", "0x", "12a", "-1", "0xzz", "1_000", "+5", "0x_1", "0x+1", "1 000",
        ] {
            assert!(
                matches!(bad.parse::<Uint256>(), Err(ParseError::InvalidInteger(_))),
                "{bad} should be rejected"
            );
        }
    }
}
