//! Assembling the per-claim record handed to the verifier.

use batchroot_core::base::Claim;
use batchroot_core::schema::record::ClaimRecord;

use crate::core::BatchError;
use crate::leaf::LeafVersion;
use crate::proof::encode;
use crate::tree::MerkleTree;

/// Build the verifier record for `claim`, stored at leaf `index` of `tree`.
///
/// Besides assembling the proof and claim fields, the claim is hashed again and compared with the
/// stored leaf, so a record is never produced for a claim the tree does not commit to.
///
/// # Errors
/// Returns [`BatchError::IndexOutOfRange`] for a position outside the tree,
/// [`BatchError::InvalidClaim`] if the claim cannot be hashed under `version`,
/// [`BatchError::LeafMismatch`] if it does not hash to the leaf at `index`, and
/// [`BatchError::ProofTooLong`] if the proof cannot be encoded.
pub fn export(
    claim: &Claim,
    tree: &MerkleTree,
    index: usize,
    version: LeafVersion,
) -> Result<ClaimRecord, BatchError> {
    let proof = tree.proof(index)?;
    let leaf = version
        .hash(claim)
        .map_err(|source| BatchError::InvalidClaim { index, source })?;
    if tree.leaf(index)? != leaf {
        return Err(BatchError::LeafMismatch(index));
    }

    Ok(ClaimRecord {
        grant_id: claim.grant_id,
        root: tree.root(),
        sister_nodes: proof.siblings().collect(),
        encoded_orientation: encode(&proof)?,
        nullifier_hash: claim.nullifier_hash,
        receiver: claim.receiver,
        leaf_index: index,
    })
}

#[cfg(test)]
mod tests {
    use batchroot_core::base::Uint256;

    use super::*;
    use crate::padding::padded_leaves;

    fn claims() -> Vec<Claim> {
        (1_u8..=3)
            .map(|i| {
                Claim::new(
                    Some(Uint256::from(30)),
                    test_utils::address(i),
                    Uint256::from(u64::from(i)),
                )
            })
            .collect()
    }

    fn tree(version: LeafVersion) -> MerkleTree {
        MerkleTree::build(padded_leaves(version, &claims(), 4).expect("capacity fits"))
            .expect("power of two")
    }

    #[test]
    fn record_matches_tree() {
        let tree = tree(LeafVersion::V2);
        let claims = claims();
        let record = export(&claims[2], &tree, 2, LeafVersion::V2).expect("claim 2 exports");

        let proof = tree.proof(2).expect("index 2 exists");
        assert_eq!(record.root, tree.root());
        assert_eq!(record.sister_nodes, proof.siblings().collect::<Vec<_>>());
        assert_eq!(record.encoded_orientation.flags(2), vec![false, true]);
        assert_eq!(record.receiver, claims[2].receiver);
        assert_eq!(record.nullifier_hash, Uint256::from(3));
        assert_eq!(record.grant_id, Some(Uint256::from(30)));
        assert_eq!(record.leaf_index, 2);
    }

    #[test]
    fn wrong_index_is_detected() {
        let tree = tree(LeafVersion::V1);
        let claims = claims();
        assert_eq!(
            export(&claims[0], &tree, 1, LeafVersion::V1),
            Err(BatchError::LeafMismatch(1))
        );
        assert_eq!(
            export(&claims[0], &tree, 4, LeafVersion::V1),
            Err(BatchError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn wrong_version_is_detected() {
        let tree = tree(LeafVersion::V1);
        assert_eq!(
            export(&claims()[0], &tree, 0, LeafVersion::V2),
            Err(BatchError::LeafMismatch(0))
        );
    }
}
