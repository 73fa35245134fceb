//! Allowlist build command implementation.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::dialect::{ListKind, OutputDialect, OutputStyle};
use crate::fetcher::HttpFetcher;
use crate::lock::LockGuard;
use crate::publisher::publish;
use crate::utils::format_count;

/// Run the allowlist pipeline over the statically configured sources.
pub async fn run(
    style: Option<OutputStyle>,
    output: Option<PathBuf>,
    dry_run: bool,
    config_path: &Path,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    let style = style.unwrap_or(config.style);
    let target = output.unwrap_or_else(|| config.output_path(style, ListKind::Allow));

    if config.allowlist.sources.is_empty() {
        warn!("No allowlist sources configured. Nothing to do.");
        return Ok(());
    }
    info!("Aggregating {} allowlist sources", config.allowlist.sources.len());

    let fetcher = HttpFetcher::new(Duration::from_secs(config.fetch.timeout_secs))?;
    let dialect = OutputDialect::new(style, ListKind::Allow, config.blocklist.sinkhole_address);
    let entries = super::aggregate_with_deadline(
        &fetcher,
        &config.allowlist.sources,
        &dialect,
        &config.fetch,
    )
    .await?;

    if entries.is_empty() {
        anyhow::bail!("No entries aggregated from any source");
    }

    if dry_run {
        println!(
            "[dry-run] {} entries from {} sources, would write {:?}",
            format_count(entries.len()),
            config.allowlist.sources.len(),
            target
        );
        return Ok(());
    }

    let _lock = LockGuard::acquire(&target)?;
    publish(&target, &entries)?;

    println!(
        "[OK] {} entries written to {:?} ({} style)",
        format_count(entries.len()),
        target,
        style
    );

    Ok(())
}
