//! Shared public formats and types for batchroot.
//!
//! [`base`] holds the fixed-width primitives a claim batch is made of, [`schema`] holds the
//! JSON documents exchanged with the claim crawler and with the verifier tooling.

pub mod base;
pub mod schema;
