//! Claim batch sources.
//!
//! A source turns an external batch description into an owned, validated [`ClaimBatch`]. Only the
//! crawler JSON file is supported today; the trait keeps the commands independent of where the
//! batch comes from.

use std::future::Future;
use std::path::PathBuf;

use batchroot_core::base::{Claim, Node, ParseError, Uint256};
use batchroot_core::schema::batch::BatchInput;
use batchroot_tree::{BatchError, parse_claims};
use thiserror::Error;

/// Errors raised while loading a claim batch.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The input file could not be read.
    #[error("Failed to read claim batch {path}: {source}")]
    Io {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The input is not a valid batch document.
    #[error("Failed to parse claim batch {path}: {source}")]
    Json {
        /// Input path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The declared root is malformed.
    #[error("Invalid declared root: {0}")]
    DeclaredRoot(#[source] ParseError),
    /// The declared claim count disagrees with the claims present.
    #[error("Batch declares {declared} claims but contains {actual}")]
    CountMismatch {
        /// `num_proofs` of the batch.
        declared: usize,
        /// Number of claim entries.
        actual: usize,
    },
    /// A claim entry is malformed.
    #[error(transparent)]
    Claims(#[from] BatchError),
}

/// A validated claim batch, ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimBatch {
    /// Root the batch was previously committed to.
    pub declared_root: Node,
    /// Number of leaves the commitment is padded to.
    pub capacity: usize,
    /// The real claims, in batch order.
    pub claims: Vec<Claim>,
}

impl TryFrom<&BatchInput> for ClaimBatch {
    type Error = SourceError;

    fn try_from(input: &BatchInput) -> Result<Self, Self::Error> {
        if input.num_proofs != input.claims.len() {
            return Err(SourceError::CountMismatch {
                declared: input.num_proofs,
                actual: input.claims.len(),
            });
        }
        let declared_root = input
            .root
            .parse::<Uint256>()
            .map(Node::from)
            .map_err(SourceError::DeclaredRoot)?;
        let claims = parse_claims(input)?;

        Ok(Self {
            declared_root,
            capacity: input.max_proofs,
            claims,
        })
    }
}

/// Something that can produce a [`ClaimBatch`].
pub trait ClaimSource {
    /// Error raised while loading.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and validate the batch.
    fn load(&self) -> impl Future<Output = Result<ClaimBatch, Self::Error>> + Send;
}

/// Reads a crawler-format JSON batch from disk.
#[allow(
    clippy::module_name_repetitions,
    reason = "Clearer name for source type"
)]
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ClaimSource for FileSource {
    type Error = SourceError;

    async fn load(&self) -> Result<ClaimBatch, Self::Error> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        let input: BatchInput =
            serde_json::from_str(&raw).map_err(|source| SourceError::Json {
                path: self.path.clone(),
                source,
            })?;
        ClaimBatch::try_from(&input)
    }
}

impl ClaimSource for BatchInput {
    type Error = SourceError;

    async fn load(&self) -> Result<ClaimBatch, Self::Error> {
        ClaimBatch::try_from(self)
    }
}
