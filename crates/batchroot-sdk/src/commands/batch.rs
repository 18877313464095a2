//! Batch-level commands: computing the root and dumping the tree.

use std::fmt::Write as _;
use std::path::PathBuf;

use batchroot_core::base::Node;
use batchroot_tree::{BatchCommitment, MerkleTree};
use eyre::{Context as _, ensure};
use tracing::{debug, info, instrument, warn};

use crate::common::{BatchConfig, write_atomic};
use crate::source::{ClaimSource as _, FileSource};

/// Compare the declared root of a batch with the recomputed one.
///
/// # Errors
/// Fails on mismatch unless `allow_mismatch` is set, in which case the mismatch is only logged.
pub fn check_root(declared: Node, computed: Node, allow_mismatch: bool) -> eyre::Result<()> {
    if declared == computed {
        info!(root = %computed, "Declared root matches");
        return Ok(());
    }
    ensure!(
        allow_mismatch,
        "root mismatch: declared {declared}, computed {computed}"
    );
    warn!(%declared, %computed, "Declared root does not match, continuing");
    Ok(())
}

/// Load the batch from `config.input`, commit it and cross-check the declared root.
///
/// # Errors
/// Fails if the batch cannot be loaded or committed, or on a root mismatch (see [`check_root`]).
#[instrument(skip_all, fields(input = %config.input.display(), version = %config.version))]
pub async fn load_commitment(config: &BatchConfig) -> eyre::Result<BatchCommitment> {
    let batch = FileSource::new(config.input.clone())
        .load()
        .await
        .context("Failed to load claim batch")?;
    info!(
        claims = batch.claims.len(),
        capacity = batch.capacity,
        "Loaded claim batch"
    );

    let declared_root = batch.declared_root;
    let commitment = BatchCommitment::build(config.version, batch.claims, batch.capacity)
        .context("Failed to commit claim batch")?;
    debug!(depth = commitment.tree().depth(), "Built batch tree");

    check_root(declared_root, commitment.root(), config.allow_root_mismatch)?;
    Ok(commitment)
}

/// Compute the batch root and print it to stdout.
///
/// # Errors
/// See [`load_commitment`].
#[allow(clippy::print_stdout, reason = "The root is the command output")]
pub async fn batch_root(config: BatchConfig) -> eyre::Result<()> {
    let commitment = load_commitment(&config).await?;
    let root = commitment.root();
    info!(%root, "Computed batch root");
    println!("{root}");
    Ok(())
}

/// Render every layer of `tree` as `level:index:0xhash` lines, leaves first.
#[must_use]
pub fn render_tree(tree: &MerkleTree) -> String {
    let mut out = String::new();
    for (level, layer) in tree.layers().iter().enumerate() {
        for (index, node) in layer.iter().enumerate() {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{level}:{index}:{node}");
        }
    }
    out
}

/// Write the full tree of the batch to `out`.
///
/// # Errors
/// See [`load_commitment`]; also fails if the output cannot be written.
#[instrument(skip_all, fields(out = %out.display()))]
pub async fn dump_tree(config: BatchConfig, out: PathBuf) -> eyre::Result<()> {
    let commitment = load_commitment(&config).await?;
    let dump = render_tree(commitment.tree());
    write_atomic(&out, dump.as_bytes()).await?;
    info!(
        layers = commitment.tree().layers().len(),
        "Tree dump written"
    );
    Ok(())
}
