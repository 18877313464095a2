//! Versioned leaf hashing.

use std::fmt;

use batchroot_core::base::{Address, Claim, Node, Uint256, keccak256};

use crate::core::ClaimError;

/// Leaf hash layout. Verifiers are pinned to exactly one version, so it is always chosen
/// explicitly and never inferred from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafVersion {
    /// `keccak256(receiver[20] || nullifier_hash[32])`.
    V1,
    /// `keccak256(grant_id[32] || receiver[20] || nullifier_hash[32])`.
    V2,
}

impl LeafVersion {
    /// Hash a claim into its leaf.
    ///
    /// # Errors
    /// Returns [`ClaimError::MissingGrantId`] for a v2 leaf whose claim has no grant id.
    pub fn hash(self, claim: &Claim) -> Result<Node, ClaimError> {
        let grant_id = match self {
            Self::V1 => claim.grant_id.unwrap_or_default(),
            Self::V2 => claim.grant_id.ok_or(ClaimError::MissingGrantId)?,
        };
        Ok(self.hash_fields(&grant_id, &claim.receiver, &claim.nullifier_hash))
    }

    /// Hash fields that are known to be complete. `grant_id` is ignored by v1.
    pub(crate) fn hash_fields(
        self,
        grant_id: &Uint256,
        receiver: &Address,
        nullifier_hash: &Uint256,
    ) -> Node {
        let receiver = receiver.to_bytes();
        let nullifier_hash = nullifier_hash.to_be_bytes();
        let digest = match self {
            Self::V1 => keccak256(&[&receiver, &nullifier_hash]),
            Self::V2 => keccak256(&[&grant_id.to_be_bytes(), &receiver, &nullifier_hash]),
        };
        Node::from_bytes(digest)
    }
}

impl fmt::Display for LeafVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("v1"),
            Self::V2 => f.write_str("v2"),
        }
    }
}
