//! Binary keccak Merkle tree over a complete leaf sequence.

use batchroot_core::base::Node;

use crate::core::BatchError;
use crate::proof::{Proof, ProofStep};

fn validate_leaf_count(leaf_count: usize) -> Result<(), BatchError> {
    if leaf_count == 0 {
        return Err(BatchError::EmptyLeaves);
    }
    Ok(())
}

/// Hash adjacent pairs of `layer` into the layer above it.
fn next_layer(level: usize, layer: &[Node]) -> Result<Vec<Node>, BatchError> {
    let (pairs, unpaired) = layer.as_chunks::<2>();
    if !unpaired.is_empty() {
        return Err(BatchError::MalformedLayer {
            layer: level,
            len: layer.len(),
        });
    }
    Ok(pairs
        .iter()
        .map(|[left, right]| Node::combine(left, right))
        .collect())
}

/// All layers of a batch tree, from the leaves up to the single-node root layer.
///
/// Built once per batch and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    layers: Vec<Vec<Node>>,
}

impl MerkleTree {
    /// Build the tree over `leaves`.
    ///
    /// A single leaf is its own root. Otherwise every layer is paired `(2k, 2k + 1)` and hashed
    /// left operand first until one node remains.
    ///
    /// # Errors
    /// Returns [`BatchError::EmptyLeaves`] for an empty sequence and
    /// [`BatchError::MalformedLayer`] if some layer above the root has odd length, i.e. the leaf
    /// count is not a power of two.
    pub fn build(leaves: Vec<Node>) -> Result<Self, BatchError> {
        validate_leaf_count(leaves.len())?;

        let mut layers = Vec::new();
        let mut current = leaves;
        while current.len() > 1 {
            let next = next_layer(layers.len(), &current)?;
            layers.push(current);
            current = next;
        }
        layers.push(current);

        Ok(Self { layers })
    }

    /// The root of the tree.
    #[must_use]
    pub fn root(&self) -> Node {
        self.layers
            .last()
            .and_then(|root_layer| root_layer.first())
            .copied()
            .unwrap_or_default()
    }

    /// Number of leaves, padding included.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.layers.first().map_or(0, Vec::len)
    }

    /// Number of layers below the root, i.e. the length of every proof.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    /// Every layer, leaves first.
    #[must_use]
    pub fn layers(&self) -> &[Vec<Node>] {
        &self.layers
    }

    /// The leaf at `index`.
    ///
    /// # Errors
    /// Returns [`BatchError::IndexOutOfRange`] if `index` is not a leaf position.
    pub fn leaf(&self, index: usize) -> Result<Node, BatchError> {
        self.layers
            .first()
            .and_then(|leaves| leaves.get(index))
            .copied()
            .ok_or(BatchError::IndexOutOfRange {
                index,
                len: self.leaf_count(),
            })
    }

    /// Inclusion proof for the leaf at `index`.
    ///
    /// Walks from the leaves up to the layer just below the root. An even position is the left
    /// operand, so its sibling at `position + 1` is recorded as a right sibling; an odd position
    /// records its sibling at `position - 1` as a left sibling. A sibling outside its layer is
    /// skipped.
    ///
    /// # Errors
    /// Returns [`BatchError::IndexOutOfRange`] if `index` is not a leaf position.
    pub fn proof(&self, index: usize) -> Result<Proof, BatchError> {
        let len = self.leaf_count();
        if index >= len {
            return Err(BatchError::IndexOutOfRange { index, len });
        }

        let mut steps = Vec::with_capacity(self.depth());
        let mut position = index;
        for layer in self.layers.iter().take(self.depth()) {
            let sibling_is_left = !position.is_multiple_of(2);
            let sibling_position = if sibling_is_left {
                position.saturating_sub(1)
            } else {
                position.saturating_add(1)
            };
            if let Some(sibling) = layer.get(sibling_position) {
                steps.push(ProofStep {
                    sibling: *sibling,
                    sibling_is_left,
                });
            }
            position /= 2;
        }

        Ok(Proof::new(steps))
    }
}
