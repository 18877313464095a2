//! Per-claim output record consumed by the verifier contract or proving circuit.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::base::{Address, EncodedOrientation, Node, Uint256};

/// Everything a verifier needs to check one claim against a batch root.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    /// Grant id (minimal `0x` hex). Omitted when the batch carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub grant_id: Option<Uint256>,
    /// Recomputed tree root.
    #[schemars(with = "String")]
    pub root: Node,
    /// Sibling hashes from the leaf layer upward.
    #[schemars(with = "Vec<String>")]
    pub sister_nodes: Vec<Node>,
    /// Byte-per-level orientation flags, `0x01` when the sibling is on the left.
    #[serde(rename = "isLeftBytes")]
    #[schemars(with = "String")]
    pub encoded_orientation: EncodedOrientation,
    /// Nullifier hash (minimal `0x` hex).
    #[schemars(with = "String")]
    pub nullifier_hash: Uint256,
    /// Receiver address (EIP-55).
    #[schemars(with = "String")]
    pub receiver: Address,
    /// Position of the claim's leaf in the batch.
    pub leaf_index: usize,
}
