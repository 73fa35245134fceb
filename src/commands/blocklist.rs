//! Blocklist build command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::config::{Config, ListSource};
use crate::dialect::{ListKind, OutputDialect, OutputStyle};
use crate::fetcher::HttpFetcher;
use crate::lock::LockGuard;
use crate::manifest::resolve_sources;
use crate::publisher::publish;
use crate::utils::format_count;

/// Run the blocklist pipeline: manifest -> tier filter -> fetch ->
/// normalize -> aggregate -> publish.
pub async fn run(
    style: Option<OutputStyle>,
    output: Option<PathBuf>,
    tiers: Option<String>,
    manifest_url: Option<String>,
    dry_run: bool,
    config_path: &Path,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    let style = style.unwrap_or(config.style);
    let tiers = tiers.unwrap_or_else(|| config.blocklist.tiers.clone());
    let manifest_url = manifest_url.unwrap_or_else(|| config.blocklist.manifest_url.clone());
    let target = output.unwrap_or_else(|| config.output_path(style, ListKind::Block));

    let fetcher = HttpFetcher::new(Duration::from_secs(config.fetch.timeout_secs))?;

    info!("Resolving sources from {} (tiers: {})", manifest_url, tiers);
    let descriptors = resolve_sources(&fetcher, &manifest_url, &tiers)
        .await
        .context("Failed to resolve blocklist sources")?;

    if descriptors.is_empty() {
        anyhow::bail!(
            "No manifest sources matched tier pattern '{}'. \
             Try a broader pattern such as 'tick|std'.",
            tiers
        );
    }
    info!("Selected {} sources", descriptors.len());

    let sources: Vec<ListSource> = descriptors
        .iter()
        .map(|d| ListSource {
            name: d.label(),
            url: d.url.clone(),
        })
        .collect();

    let dialect = OutputDialect::new(style, ListKind::Block, config.blocklist.sinkhole_address);
    let entries = super::aggregate_with_deadline(&fetcher, &sources, &dialect, &config.fetch).await?;

    if entries.is_empty() {
        anyhow::bail!("No entries aggregated from any source");
    }

    if dry_run {
        println!(
            "[dry-run] {} entries from {} sources, would write {:?}",
            format_count(entries.len()),
            sources.len(),
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
