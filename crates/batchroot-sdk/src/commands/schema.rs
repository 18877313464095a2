//! JSON schemas of the batch input and the claim record output.

use batchroot_core::schema::batch::BatchInput;
use batchroot_core::schema::record::ClaimRecord;

/// Print the JSON schemas of the batch input and claim record formats.
///
/// # Errors
/// Fails if a schema cannot be serialized.
#[allow(clippy::print_stdout, reason = "Prints schema to stdout")]
pub fn print_schema() -> eyre::Result<()> {
    let input = serde_json::to_string_pretty(&schemars::schema_for!(BatchInput))?;
    println!("Claim Batch JSON Schema:\n{input}");
    let record = serde_json::to_string_pretty(&schemars::schema_for!(ClaimRecord))?;
    println!("Claim Record JSON Schema:\n{record}");
    Ok(())
}
