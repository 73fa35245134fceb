//! hostsink - remote host list aggregator for DNS-level content filters.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use hostsink::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Blocklist {
            style,
            output,
            tiers,
            manifest_url,
            dry_run,
        } => {
            hostsink::commands::blocklist::run(style, output, tiers, manifest_url, dry_run, &cli.config)
                .await
        }
        Commands::Allowlist {
            style,
            output,
            dry_run,
        } => hostsink::commands::allowlist::run(style, output, dry_run, &cli.config).await,
        Commands::Sources { tiers, manifest_url } => {
            hostsink::commands::sources::run(tiers, manifest_url, &cli.config).await
        }
        Commands::Init { force } => hostsink::commands::init::run(force, &cli.config),
        Commands::Version => {
            println!("hostsink {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
