//! Foundational primitive types and byte/serde helpers.

mod address;
mod claim;
mod error;
mod keccak;
mod node;
mod orientation;
mod uint;

pub use address::{ADDRESS_SIZE, Address};
pub use claim::Claim;
pub use error::ParseError;
pub use keccak::keccak256;
pub use node::{NODE_SIZE, Node};
pub use orientation::{EncodedOrientation, MAX_ORIENTATION_FLAGS};
pub use uint::Uint256;

/// Strips an optional `0x`/`0X` prefix.
fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
