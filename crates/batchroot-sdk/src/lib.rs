//! Workflow logic behind the `batchroot` commands: loading a claim batch, committing it,
//! cross-checking the declared root and writing verifier records.

pub mod commands;
pub mod common;
pub mod source;
