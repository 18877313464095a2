//! 32-byte tree nodes.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use super::{ParseError, Uint256, keccak256, strip_hex_prefix};

/// Size of a node in bytes.
pub const NODE_SIZE: usize = 32;

/// A 256-bit hash value: a leaf, an inner node or a root.
///
/// The text form is `0x` followed by 64 lowercase hex digits.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Node([u8; NODE_SIZE]);

impl Node {
    /// The all-zero node.
    pub const ZERO: Self = Self([0_u8; NODE_SIZE]);

    /// Wrap raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; NODE_SIZE]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; NODE_SIZE] {
        self.0
    }

    /// Parent of two adjacent nodes: `keccak256(left || right)`, left operand first.
    #[must_use]
    pub fn combine(left: &Self, right: &Self) -> Self {
        Self(keccak256(&[&left.0, &right.0]))
    }
}

impl AsRef<[u8]> for Node {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; NODE_SIZE]> for Node {
    fn from(bytes: [u8; NODE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Uint256> for Node {
    fn from(value: Uint256) -> Self {
        Self(value.to_be_bytes())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({self})")
    }
}

impl FromStr for Node {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0_u8; NODE_SIZE];
        hex::decode_to_slice(strip_hex_prefix(s.trim()), &mut bytes)
            .map_err(|_| ParseError::InvalidNode(s.to_owned()))?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn combine_is_ordered() {
        let a = Node::from_bytes([1_u8; 32]);
        let b = Node::from_bytes([2_u8; 32]);
        assert_ne!(Node::combine(&a, &b), Node::combine(&b, &a));
        assert_eq!(
            Node::combine(&a, &b).to_bytes(),
            keccak256(&[&[1_u8; 32], &[2_u8; 32]])
        );
    }

    #[test]
    fn text_form() {
        let node = Node::from_bytes(hex!(
            "00000000000000000000000000000000000000000000000000000000000000ff"
        ));
        let text = node.to_string();
        assert_eq!(
            text,
            "0x00000000000000000000000000000000000000000000000000000000000000ff"
        );
        assert_eq!(text.parse::<Node>(), Ok(node));
        assert_eq!(text.trim_start_matches("0x").parse::<Node>(), Ok(node));
    }

    #[test]
    fn rejects_short_hex() {
        assert!(matches!(
            "0x1234".parse::<Node>(),
            Err(ParseError::InvalidNode(_))
        ));
    }

    #[test]
    fn serde_uses_text_form() {
        let node = Node::from_bytes([0xab_u8; 32]);
        let json = serde_json::to_string(&node).expect("node should serialize");
        assert_eq!(json, format!("\"{node}\""));
        let back: Node = serde_json::from_str(&json).expect("node should deserialize");
        assert_eq!(back, node);
    }
}
