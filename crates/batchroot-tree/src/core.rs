//! Shared error types.

use batchroot_core::base::ParseError;
use thiserror::Error;

/// Errors that abort the processing of a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// A claim could not be turned into a leaf.
    #[error("Invalid claim at index {index}: {source}")]
    InvalidClaim {
        /// Position of the claim in the batch.
        index: usize,
        /// What is wrong with it.
        #[source]
        source: ClaimError,
    },

    /// The batch capacity cannot hold the real claims.
    #[error("Capacity {capacity} is smaller than the {real} real claims")]
    InvalidCapacity {
        /// Number of real claims.
        real: usize,
        /// Requested capacity.
        capacity: usize,
    },

    /// A layer other than the root has an unpaired trailing element.
    #[error(
        "Layer {layer} has {len} nodes and cannot be paired; batch capacity must be a power of two"
    )]
    MalformedLayer {
        /// Layer number, 0 being the leaves.
        layer: usize,
        /// Number of nodes in that layer.
        len: usize,
    },

    /// A proof or export was requested for a position outside the batch.
    #[error("Index {index} is out of range for {len} entries")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of addressable entries.
        len: usize,
    },

    /// The proof has more levels than the orientation encoding can hold.
    #[error("Proof has {0} levels, at most 32 can be encoded")]
    ProofTooLong(usize),

    /// A tree needs at least one leaf.
    #[error("Cannot build a tree from zero leaves")]
    EmptyLeaves,

    /// The claim handed to the exporter does not hash to the leaf stored at its index.
    #[error("Claim does not match the leaf at index {0}")]
    LeafMismatch(usize),
}

/// Why a single claim is invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    /// Malformed address or integer field.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// v2 leaves commit to a grant id but neither the claim nor the batch carries one.
    #[error("Missing grant id, required by v2 leaves")]
    MissingGrantId,
}
