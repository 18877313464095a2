//! Filling a batch up to its declared capacity.

use std::sync::LazyLock;

use batchroot_core::base::{Claim, Node};

use crate::core::BatchError;
use crate::leaf::LeafVersion;

fn padding_claim_leaf(version: LeafVersion) -> Node {
    let Claim {
        grant_id,
        receiver,
        nullifier_hash,
    } = Claim::PADDING;
    version.hash_fields(&grant_id.unwrap_or_default(), &receiver, &nullifier_hash)
}

static PADDING_V1: LazyLock<Node> = LazyLock::new(|| padding_claim_leaf(LeafVersion::V1));
static PADDING_V2: LazyLock<Node> = LazyLock::new(|| padding_claim_leaf(LeafVersion::V2));

/// Leaf of the canonical zero claim (zero grant, zero address, zero nullifier).
#[must_use]
pub fn padding_leaf(version: LeafVersion) -> Node {
    match version {
        LeafVersion::V1 => *PADDING_V1,
        LeafVersion::V2 => *PADDING_V2,
    }
}

/// Deepest tree whose paths still fit in an orientation encoding.
const MAX_DEPTH: u32 = 32;

/// Reject capacities that cannot hold `real` claims or cannot form a provable tree.
///
/// Runs before any leaf is allocated, so capacities read from untrusted input fail with an error
/// instead of exhausting memory.
fn validate_capacity(real: usize, capacity: usize) -> Result<(), BatchError> {
    if capacity < real {
        return Err(BatchError::InvalidCapacity { real, capacity });
    }
    if capacity == 0 {
        return Err(BatchError::EmptyLeaves);
    }
    let depth = capacity.trailing_zeros();
    let layer = usize::try_from(depth).unwrap_or(usize::MAX);
    if !capacity.is_power_of_two() {
        // Layer `depth` is the first odd one, the layer a build would stop at.
        return Err(BatchError::MalformedLayer {
            layer,
            len: capacity.checked_shr(depth).unwrap_or(capacity),
        });
    }
    if depth > MAX_DEPTH {
        return Err(BatchError::ProofTooLong(layer));
    }
    Ok(())
}

/// Extend `leaves` with padding leaves until it holds `capacity` entries.
///
/// # Errors
/// Returns [`BatchError::InvalidCapacity`] if there are more leaves than `capacity`,
/// [`BatchError::MalformedLayer`] if `capacity` is not a power of two, and
/// [`BatchError::ProofTooLong`] if the tree would be deeper than 32 levels.
pub fn pad_leaves(
    version: LeafVersion,
    mut leaves: Vec<Node>,
    capacity: usize,
) -> Result<Vec<Node>, BatchError> {
    validate_capacity(leaves.len(), capacity)?;
    leaves.resize(capacity, padding_leaf(version));
    Ok(leaves)
}

/// Hash `claims` in order and pad the result to `capacity`.
///
/// # Errors
/// Returns [`BatchError::InvalidClaim`] for the first claim that cannot be hashed, and the
/// capacity errors of [`pad_leaves`].
pub fn padded_leaves(
    version: LeafVersion,
    claims: &[Claim],
    capacity: usize,
) -> Result<Vec<Node>, BatchError> {
    validate_capacity(claims.len(), capacity)?;
    let mut leaves = Vec::with_capacity(capacity);
    for (index, claim) in claims.iter().enumerate() {
        leaves.push(
            version
                .hash(claim)
                .map_err(|source| BatchError::InvalidClaim { index, source })?,
        );
    }
    pad_leaves(version, leaves, capacity)
}

#[cfg(test)]
mod tests {
    use batchroot_core::base::Uint256;
    use hex_literal::hex;

    use super::*;
    use crate::core::ClaimError;

    #[test]
    fn padding_leaf_values() {
        assert_eq!(
            padding_leaf(LeafVersion::V1),
            Node::from_bytes(hex!(
                "a86d54e9aab41ae5e520ff0062ff1b4cbd0b2192bb01080a058bb170d84e6457"
            ))
        );
        assert_eq!(
            padding_leaf(LeafVersion::V2),
            Node::from_bytes(hex!(
                "7733ef1f65c467ebbbb75072ade6f3677cc49a146089f0a95abd1e4015c837b9"
            ))
        );
    }

    #[test]
    fn padding_leaf_is_the_zero_claim() {
        for version in [LeafVersion::V1, LeafVersion::V2] {
            assert_eq!(Ok(padding_leaf(version)), version.hash(&Claim::PADDING));
        }
    }

    #[test]
    fn one_claim_padded_to_four() {
        let claim = Claim::new(
            Some(Uint256::from(30)),
            test_utils::address(7),
            Uint256::from(1),
        );
        let leaves =
            padded_leaves(LeafVersion::V2, &[claim], 4).expect("capacity holds the claim");
        assert_eq!(leaves.len(), 4);
        assert_eq!(leaves.first(), LeafVersion::V2.hash(&claim).ok().as_ref());
        for leaf in leaves.iter().skip(1) {
            assert_eq!(*leaf, padding_leaf(LeafVersion::V2));
        }
    }

    #[test]
    fn exact_capacity_adds_nothing() {
        let leaves = vec![Node::from_bytes([1_u8; 32]), Node::from_bytes([2_u8; 32])];
        assert_eq!(
            pad_leaves(LeafVersion::V1, leaves.clone(), 2),
            Ok(leaves)
        );
    }

    #[test]
    fn capacity_below_claim_count() {
        let leaves = vec![Node::ZERO; 3];
        assert_eq!(
            pad_leaves(LeafVersion::V1, leaves, 2),
            Err(BatchError::InvalidCapacity {
                real: 3,
                capacity: 2
            })
        );
    }

    #[test]
    fn bad_claim_reports_its_index() {
        let good = Claim::new(Some(Uint256::from(1)), test_utils::address(1), Uint256::ZERO);
        let missing_grant = Claim::new(None, test_utils::address(2), Uint256::ZERO);
        assert_eq!(
            padded_leaves(LeafVersion::V2, &[good, missing_grant], 4),
            Err(BatchError::InvalidClaim {
                index: 1,
                source: ClaimError::MissingGrantId
            })
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_capacity_fails_before_allocating() {
        let claim = Claim::new(Some(Uint256::from(1)), test_utils::address(1), Uint256::ZERO);
        assert_eq!(
            padded_leaves(LeafVersion::V2, &[claim], usize::MAX),
            Err(BatchError::MalformedLayer {
                layer: 0,
                len: usize::MAX
            })
        );
        assert_eq!(
            padded_leaves(LeafVersion::V2, &[claim], 1_usize << 33),
            Err(BatchError::ProofTooLong(33))
        );
        assert_eq!(
            pad_leaves(LeafVersion::V1, vec![Node::ZERO], 1_usize << 40),
            Err(BatchError::ProofTooLong(40))
        );
    }

    #[test]
    fn non_power_of_two_capacity_reports_first_odd_layer() {
        assert_eq!(
            pad_leaves(LeafVersion::V1, vec![], 12),
            Err(BatchError::MalformedLayer { layer: 2, len: 3 })
        );
        assert_eq!(
            pad_leaves(LeafVersion::V1, vec![], 0),
            Err(BatchError::EmptyLeaves)
        );
    }
}
