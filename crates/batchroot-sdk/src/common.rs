//! Configuration shared by every batch command, and output helpers.

use std::path::{Path, PathBuf};

use batchroot_tree::LeafVersion;
use eyre::{Context as _, ContextCompat as _};
use serde::Serialize;
use tokio::io::AsyncWriteExt as _;

/// Settings common to every command that reads a claim batch.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Claim batch JSON file.
    pub input: PathBuf,
    /// Leaf layout the verifier is pinned to.
    pub version: LeafVersion,
    /// Downgrade a declared/computed root mismatch from an error to a warning.
    pub allow_root_mismatch: bool,
}

/// Serialize `value` as pretty JSON into `destination`.
///
/// The document is written to a sibling temp file first and renamed into place, so readers never
/// observe a partial file.
pub async fn write_json_atomic<T: Serialize + Sync>(
    value: &T,
    destination: &Path,
) -> eyre::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    write_atomic(destination, json.as_bytes()).await
}

/// Write `contents` to `destination` through a temp file and a rename.
pub async fn write_atomic(destination: &Path, contents: &[u8]) -> eyre::Result<()> {
    let file_name = destination
        .file_name()
        .context("Output path has no file name")?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = destination.with_file_name(temp_name);

    let mut file = tokio::fs::File::create(&temp_path)
        .await
        .with_context(|| format!("Failed to create {}", temp_path.display()))?;
    file.write_all(contents)
        .await
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    file.flush().await?;
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(&temp_path, destination)
        .await
        .with_context(|| format!("Failed to move output into {}", destination.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn atomic_write_replaces_file() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.json");
        tokio::fs::write(&path, "old").await?;

        write_json_atomic(&vec![1, 2, 3], &path).await?;

        let contents = tokio::fs::read_to_string(&path).await?;
        let parsed: Vec<u8> = serde_json::from_str(&contents)?;
        assert_eq!(parsed, vec![1, 2, 3]);
        assert!(!dir.path().join("out.json.tmp").exists());
        Ok(())
    }

    #[tokio::test]
    async fn missing_directory_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("out.json");
        assert!(write_atomic(&path, b"x").await.is_err());
    }
}
