//! Inclusion proofs and their orientation encoding.

use batchroot_core::base::{EncodedOrientation, MAX_ORIENTATION_FLAGS, Node};

use crate::core::BatchError;

/// One level of a proof path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofStep {
    /// Hash of the sibling node at this level.
    pub sibling: Node,
    /// `true` when the sibling sits to the left of the path node, i.e. the path node is the
    /// right operand of its parent.
    pub sibling_is_left: bool,
}

/// Sibling path of a leaf, ordered from the leaf layer up to the layer below the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Proof {
    steps: Vec<ProofStep>,
}

impl Proof {
    /// Wrap an ordered list of steps.
    #[must_use]
    pub const fn new(steps: Vec<ProofStep>) -> Self {
        Self { steps }
    }

    /// The steps, leaf level first.
    #[must_use]
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the proof is empty (single-leaf tree).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sibling hashes, leaf level first.
    pub fn siblings(&self) -> impl ExactSizeIterator<Item = Node> + '_ {
        self.steps.iter().map(|step| step.sibling)
    }

    /// Orientation flags, leaf level first.
    #[must_use]
    pub fn orientation(&self) -> Vec<bool> {
        self.steps.iter().map(|step| step.sibling_is_left).collect()
    }
}

/// Encode the orientation of `proof`.
///
/// # Errors
/// Returns [`BatchError::ProofTooLong`] for proofs of more than 32 levels.
pub fn encode(proof: &Proof) -> Result<EncodedOrientation, BatchError> {
    encode_flags(&proof.orientation())
}

/// Pack orientation flags one byte per flag: `0x01` for a left sibling, `0x00` otherwise.
///
/// # Errors
/// Returns [`BatchError::ProofTooLong`] for more than 32 flags.
pub fn encode_flags(flags: &[bool]) -> Result<EncodedOrientation, BatchError> {
    if flags.len() > MAX_ORIENTATION_FLAGS {
        return Err(BatchError::ProofTooLong(flags.len()));
    }
    let mut bytes = [0_u8; MAX_ORIENTATION_FLAGS];
    for (byte, flag) in bytes.iter_mut().zip(flags) {
        *byte = u8::from(*flag);
    }
    Ok(EncodedOrientation::from_bytes(bytes))
}
