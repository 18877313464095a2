//! Claim export: verifier records for real claims of a batch.

use std::path::PathBuf;

use eyre::Context as _;
use tracing::{info, instrument};

use super::load_commitment;
use crate::common::{BatchConfig, write_json_atomic};

/// Which claims of a batch to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimSelection {
    /// A single claim, written as a JSON object.
    Index(usize),
    /// Every real claim, written as a JSON array in batch order.
    All,
}

/// Export the selected claim records of the batch to `out`.
///
/// # Errors
/// Fails if the batch cannot be committed, the index does not refer to a real claim, or the
/// output cannot be written.
#[instrument(skip_all, fields(selection = ?selection, out = %out.display()))]
pub async fn export_claims(
    config: BatchConfig,
    selection: ClaimSelection,
    out: PathBuf,
) -> eyre::Result<()> {
    let commitment = load_commitment(&config).await?;

    match selection {
        ClaimSelection::Index(index) => {
            let record = commitment
                .export(index)
                .with_context(|| format!("Failed to export claim {index}"))?;
            write_json_atomic(&record, &out).await?;
            info!(index, receiver = %record.receiver, "Claim record written");
        }
        ClaimSelection::All => {
            let records = commitment
                .export_all()
                .context("Failed to export claims")?;
            write_json_atomic(&records, &out).await?;
            info!(count = records.len(), "Claim records written");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use batchroot_core::base::Uint256;
    use batchroot_core::schema::record::ClaimRecord;
    use batchroot_tree::LeafVersion;
    use test_utils::{address, batch_json, fold_path};

    use super::*;

    async fn setup(count: u8, capacity: usize) -> eyre::Result<(tempfile::TempDir, BatchConfig)> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("batch.json");
        tokio::fs::write(&input, batch_json(count, capacity, "0")).await?;
        let config = BatchConfig {
            input,
            version: LeafVersion::V2,
            allow_root_mismatch: true,
        };
        Ok((dir, config))
    }

    #[tokio::test]
    async fn export_single_claim() -> eyre::Result<()> {
        let (dir, config) = setup(3, 4).await?;
        let out = dir.path().join("claim.json");

        export_claims(config.clone(), ClaimSelection::Index(1), out.clone()).await?;

        let record: ClaimRecord = serde_json::from_str(&tokio::fs::read_to_string(&out).await?)?;
        assert_eq!(record.leaf_index, 1);
        assert_eq!(record.receiver, address(2));
        assert_eq!(record.nullifier_hash, Uint256::from(2_000));
        assert_eq!(record.grant_id, Some(Uint256::from(30)));
        assert_eq!(record.sister_nodes.len(), 2);

        let commitment = load_commitment(&config).await?;
        assert_eq!(record.root, commitment.root());
        let leaf = commitment.tree().leaf(1).expect("real leaf");
        let flags = record.encoded_orientation.flags(record.sister_nodes.len());
        assert_eq!(
            fold_path(leaf, record.sister_nodes.iter().copied().zip(flags)),
            record.root
        );
        Ok(())
    }

    #[tokio::test]
    async fn export_all_claims() -> eyre::Result<()> {
        let (dir, config) = setup(3, 4).await?;
        let out = dir.path().join("claims.json");

        export_claims(config, ClaimSelection::All, out.clone()).await?;

        let records: Vec<ClaimRecord> =
            serde_json::from_str(&tokio::fs::read_to_string(&out).await?)?;
        let indices: Vec<usize> = records.iter().map(|r| r.leaf_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(records.windows(2).all(|w| w[0].root == w[1].root));
        Ok(())
    }

    #[tokio::test]
    async fn padding_slot_is_not_exported() -> eyre::Result<()> {
        let (dir, config) = setup(3, 4).await?;
        let out = dir.path().join("claim.json");

        let result = export_claims(config, ClaimSelection::Index(3), out.clone()).await;

        assert!(result.is_err());
        assert!(!out.exists());
        Ok(())
    }
}
