//! Shared test utilities for the workspace.

use batchroot_core::base::{Address, Node};

/// A node whose bytes are all `v`.
#[must_use]
pub const fn node(v: u8) -> Node {
    Node::from_bytes([v; 32])
}

/// An address whose last byte is `v`.
#[must_use]
pub const fn address(v: u8) -> Address {
    let mut bytes = [0_u8; 20];
    bytes[19] = v;
    Address::from_bytes(bytes)
}

/// Recompute a root from a leaf and its `(sibling, sibling_is_left)` path.
pub fn fold_path(leaf: Node, path: impl IntoIterator<Item = (Node, bool)>) -> Node {
    path.into_iter().fold(leaf, |acc, (sibling, sibling_is_left)| {
        if sibling_is_left {
            Node::combine(&sibling, &acc)
        } else {
            Node::combine(&acc, &sibling)
        }
    })
}

/// A crawler-format batch of `count` v2 claims for grant 30, padded to `capacity`, with the
/// given declared root.
#[must_use]
pub fn batch_json(count: u8, capacity: usize, root: &str) -> String {
    let claims: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "receiver": address(i).to_string(),
                "nullifier_hash": (u64::from(i) * 1_000).to_string(),
                "proof": ["0", "0", "0", "0", "0", "0", "0", "0"],
            })
        })
        .collect();
    serde_json::json!({
        "grant_id": "30",
        "root": root,
        "num_proofs": count,
        "max_proofs": capacity,
        "claims": claims,
    })
    .to_string()
}
