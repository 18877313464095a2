//! Command-line interface for the `batchroot` CLI application.

use std::path::PathBuf;

use batchroot_sdk::commands::ClaimSelection;
use batchroot_sdk::common::BatchConfig;
use batchroot_tree::LeafVersion;
use clap::Parser;
use eyre::{Result, eyre};

/// Command-line interface definition.
#[derive(Debug, Parser)]
#[command(name = "batchroot")]
#[command(about = "Airdrop claim batch commitment tools")]
pub struct Cli {
    /// CLI top-level command group.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command groups.
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Batch commitment utilities.
    Batch {
        /// Batch subcommands.
        #[command(subcommand)]
        command: BatchCommands,
    },
    /// Claim record utilities.
    Claim {
        /// Claim subcommands.
        #[command(subcommand)]
        command: ClaimCommands,
    },
    /// Print the JSON schemas of the batch input and claim record.
    Schema,
}

/// Batch command group.
#[derive(Debug, clap::Subcommand)]
pub enum BatchCommands {
    /// Compute the batch root and print it to stdout.
    Root {
        /// Batch arguments.
        #[command(flatten)]
        batch: BatchArgs,
    },
    /// Write every tree layer as `level:index:hash` lines.
    Dump {
        /// Batch arguments.
        #[command(flatten)]
        batch: BatchArgs,
        /// Tree dump output file.
        #[arg(long, env = "TREE_OUT", default_value = "tree.txt")]
        out: PathBuf,
    },
}

/// Claim command group.
#[derive(Debug, clap::Subcommand)]
pub enum ClaimCommands {
    /// Export verifier records for claims of the batch.
    Export {
        /// Batch arguments.
        #[command(flatten)]
        batch: BatchArgs,
        /// Index of the claim to export.
        #[arg(
            long,
            env = "CLAIM_INDEX",
            conflicts_with = "all",
            required_unless_present = "all"
        )]
        index: Option<usize>,
        /// Export every real claim as an array.
        #[arg(long)]
        all: bool,
        /// Claim record output file.
        #[arg(long, env = "CLAIMS_OUT", default_value = "claim.json")]
        out: PathBuf,
    },
}

impl ClaimCommands {
    /// The claims selected by `--index` / `--all`.
    pub fn selection(index: Option<usize>, all: bool) -> Result<ClaimSelection> {
        match (index, all) {
            (Some(index), false) => Ok(ClaimSelection::Index(index)),
            (None, true) => Ok(ClaimSelection::All),
            _ => Err(eyre!("Exactly one of --index or --all must be given")),
        }
    }
}

/// Arguments shared by every command reading a claim batch.
#[derive(Debug, clap::Args)]
pub struct BatchArgs {
    /// Claim batch JSON file.
    #[arg(
        long,
        env = "INPUT_FILE",
        value_name = "INPUT_FILE",
        default_value = "batch.json"
    )]
    pub input: PathBuf,
    /// Leaf layout of the target verifier (v1 or v2).
    #[arg(long = "version", env = "LEAF_VERSION", default_value = "v2", value_parser = parse_leaf_version)]
    pub leaf_version: LeafVersion,
    /// Continue with a warning when the declared root differs from the computed one.
    #[arg(long, env = "ALLOW_ROOT_MISMATCH")]
    pub allow_root_mismatch: bool,
}

impl From<BatchArgs> for BatchConfig {
    fn from(args: BatchArgs) -> Self {
        Self {
            input: args.input,
            version: args.leaf_version,
            allow_root_mismatch: args.allow_root_mismatch,
        }
    }
}

fn parse_leaf_version(s: &str) -> Result<LeafVersion> {
    match s {
        "v1" => Ok(LeafVersion::V1),
        "v2" => Ok(LeafVersion::V2),
        other => Err(eyre!("Invalid leaf version: {other}. Expected 'v1' or 'v2'.")),
    }
}
