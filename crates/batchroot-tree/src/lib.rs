//! Batch commitment trees for airdrop claims.
//!
//! Claims are hashed into leaves with an explicitly selected [`LeafVersion`], the leaf sequence
//! is padded up to the batch capacity, and a binary keccak Merkle tree is built over it. For any
//! leaf the tree yields a [`Proof`] whose orientation is packed into an
//! [`EncodedOrientation`](batchroot_core::base::EncodedOrientation) for the external verifier.

mod batch;
mod core;
mod export;
mod leaf;
mod padding;
mod proof;
mod tree;

pub use batch::{BatchCommitment, parse_claims};
pub use crate::core::{BatchError, ClaimError};
pub use export::export;
pub use leaf::LeafVersion;
pub use padding::{pad_leaves, padded_leaves, padding_leaf};
pub use proof::{Proof, ProofStep, encode, encode_flags};
pub use tree::MerkleTree;
