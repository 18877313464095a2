//! JSON documents exchanged with the claim crawler and the verifier tooling.

pub mod batch;
pub mod record;
