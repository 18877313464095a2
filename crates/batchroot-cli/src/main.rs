//! batchroot CLI Application

mod cli;

use batchroot_sdk::commands::{batch_root, dump_tree, export_claims, print_schema};
use clap::Parser as _;
use cli::{BatchCommands, ClaimCommands, Cli, Commands};

fn init_tracing() -> eyre::Result<()> {
    #[cfg(feature = "tokio-console")]
    {
        // tokio-console: layers the console subscriber with fmt
        use tracing_subscriber::prelude::*;
        tracing_subscriber::registry()
            .with(console_subscriber::spawn())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_filter(
                        tracing_subscriber::EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                    ),
            )
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing: {:?}", e))?;
    }

    #[cfg(not(feature = "tokio-console"))]
    {
        // Logs go to stderr; stdout carries command output.
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::uptime())
            .with_target(false)
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing: {:?}", e))?;
    }

    Ok(())
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> eyre::Result<()> {
    // Load .env file (fails silently if not found)
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let cli = Cli::parse();

    let res = match cli.command {
        Commands::Batch { command } => match command {
            BatchCommands::Root { batch } => batch_root(batch.into()).await,
            BatchCommands::Dump { batch, out } => dump_tree(batch.into(), out).await,
        },
        Commands::Claim { command } => match command {
            ClaimCommands::Export {
                batch,
                index,
                all,
                out,
            } => match ClaimCommands::selection(index, all) {
                Ok(selection) => export_claims(batch.into(), selection, out).await,
                Err(e) => Err(e),
            },
        },
        Commands::Schema => print_schema(),
    };

    if let Err(e) = res {
        tracing::error!("Error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
