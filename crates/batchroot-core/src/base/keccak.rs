use sha3::{Digest as _, Keccak256};

/// Keccak-256 over the exact concatenation of `parts`, with no length prefixes or padding.
#[must_use]
pub fn keccak256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(
            keccak256(&[]),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn parts_are_concatenated() {
        assert_eq!(keccak256(&[b"ab", b"c"]), keccak256(&[b"abc"]));
        assert_eq!(
            keccak256(&[b"abc"]),
            hex!("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45")
        );
    }
}
