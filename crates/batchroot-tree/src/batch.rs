//! A parsed claim batch bound to its commitment tree.

use batchroot_core::base::{Claim, Node};
use batchroot_core::schema::batch::BatchInput;
use batchroot_core::schema::record::ClaimRecord;

use crate::core::BatchError;
use crate::export::export;
use crate::leaf::LeafVersion;
use crate::padding::padded_leaves;
use crate::tree::MerkleTree;

/// Parse the claims of `input`, applying the batch-level grant id to claims without one.
///
/// # Errors
/// Returns [`BatchError::InvalidClaim`] for the first malformed claim.
pub fn parse_claims(input: &BatchInput) -> Result<Vec<Claim>, BatchError> {
    let batch_grant_id = input.grant_id.as_deref();
    input
        .claims
        .iter()
        .enumerate()
        .map(|(index, claim)| {
            Claim::parse(
                claim.grant_id_or(batch_grant_id),
                &claim.receiver,
                &claim.nullifier_hash,
            )
            .map_err(|e| BatchError::InvalidClaim {
                index,
                source: e.into(),
            })
        })
        .collect()
}

/// The real claims of a batch together with the tree committing to them.
#[derive(Debug, Clone)]
pub struct BatchCommitment {
    version: LeafVersion,
    claims: Vec<Claim>,
    tree: MerkleTree,
}

impl BatchCommitment {
    /// Hash, pad and commit `claims` into a tree of `capacity` leaves.
    ///
    /// # Errors
    /// Propagates claim, capacity and tree shape errors.
    pub fn build(
        version: LeafVersion,
        claims: Vec<Claim>,
        capacity: usize,
    ) -> Result<Self, BatchError> {
        let leaves = padded_leaves(version, &claims, capacity)?;
        let tree = MerkleTree::build(leaves)?;
        Ok(Self {
            version,
            claims,
            tree,
        })
    }

    /// Leaf version the batch was committed with.
    #[must_use]
    pub const fn version(&self) -> LeafVersion {
        self.version
    }

    /// The real claims, in batch order.
    #[must_use]
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// The commitment tree.
    #[must_use]
    pub const fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    /// The batch root.
    #[must_use]
    pub fn root(&self) -> Node {
        self.tree.root()
    }

    /// Verifier record of the real claim at `index`.
    ///
    /// # Errors
    /// Returns [`BatchError::IndexOutOfRange`] if `index` does not refer to a real claim; padding
    /// slots have nothing to export.
    pub fn export(&self, index: usize) -> Result<ClaimRecord, BatchError> {
        let claim = self
            .claims
            .get(index)
            .ok_or(BatchError::IndexOutOfRange {
                index,
                len: self.claims.len(),
            })?;
        export(claim, &self.tree, index, self.version)
    }

    /// Verifier records of every real claim, in batch order.
    ///
    /// # Errors
    /// Propagates the first export failure.
    pub fn export_all(&self) -> Result<Vec<ClaimRecord>, BatchError> {
        (0..self.claims.len())
            .map(|index| self.export(index))
            .collect()
    }
}
