//! Command implementations behind the `batchroot` CLI.
//!
//! Each command loads a claim batch, commits it with the selected leaf version and writes its
//! result either to stdout or to an output file.

mod batch;
mod claim;
mod schema;

pub use batch::{batch_root, check_root, dump_tree, load_commitment, render_tree};
pub use claim::{ClaimSelection, export_claims};
pub use schema::print_schema;
