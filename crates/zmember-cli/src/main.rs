//! zmember CLI Application

mod cli;

use clap::Parser as _;
use cli::constants::DEFAULT_LOG_FILTER;
use cli::{Cli, Commands};
use zmember_sdk::commands::{build_membership_set, membership_schema, verify_witness};

/// `RUST_LOG` if set, the default level otherwise.
fn log_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Logs go to stderr so that stdout only carries command output such as `schema`.
fn init_tracing() -> eyre::Result<()> {
    #[cfg(feature = "tokio-console")]
    let installed = {
        use tracing_subscriber::prelude::*;
        tracing_subscriber::registry()
            .with(console_subscriber::spawn())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_filter(log_filter()),
            )
            .try_init()
    };

    #[cfg(not(feature = "tokio-console"))]
    let installed = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_target(false)
        .try_init();

    installed.map_err(|e| eyre::eyre!("Failed to initialize tracing: {e}"))
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> eyre::Result<()> {
    // Load .env file (fails silently if not found)
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let cli = Cli::parse();

    let res = match cli.command {
        Commands::Build { args } => build_membership_set(args.into()).await.map(|_| ()),
        Commands::Verify { args } => verify_witness(args.root, args.witness).await,
        Commands::Schema => membership_schema(),
    };

    if let Err(e) = res {
        tracing::error!("Error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
