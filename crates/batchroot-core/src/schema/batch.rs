//! Claim batch input, as written by the claim crawler.
//!
//! Fields are kept in their textual form so that a malformed claim can be reported together
//! with its position in the batch.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A batch of claims committed to a single root.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct BatchInput {
    /// Grant shared by every claim of the batch (decimal). Claims may override it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,
    /// Root previously committed for this batch (decimal or `0x` hex).
    pub root: String,
    /// Number of real claims in `claims`.
    pub num_proofs: usize,
    /// Batch capacity; the leaf sequence is padded up to this length.
    pub max_proofs: usize,
    /// The claims, in batch order.
    pub claims: Vec<ClaimInput>,
}

/// One claim entry of a [`BatchInput`].
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ClaimInput {
    /// Grant of this claim (decimal); falls back to the batch grant when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,
    /// Receiver address (hex).
    pub receiver: String,
    /// Nullifier hash (decimal or `0x` hex).
    pub nullifier_hash: String,
    /// The claimant's Groth16 proof. Carried along, never inspected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proof: Vec<String>,
}

impl ClaimInput {
    /// The grant id of this claim, falling back to `batch_grant_id`.
    #[must_use]
    pub fn grant_id_or<'a>(&'a self, batch_grant_id: Option<&'a str>) -> Option<&'a str> {
        self.grant_id.as_deref().or(batch_grant_id)
    }
}
