//! Sources listing command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::fetcher::HttpFetcher;
use crate::manifest::resolve_sources;
use crate::utils::truncate;

/// List the manifest sources selected by the tier filter, without
/// fetching any of them.
pub async fn run(
    tiers: Option<String>,
    manifest_url: Option<String>,
    config_path: &Path,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    let tiers = tiers.unwrap_or_else(|| config.blocklist.tiers.clone());
    let manifest_url = manifest_url.unwrap_or_else(|| config.blocklist.manifest_url.clone());

    let fetcher = HttpFetcher::new(Duration::from_secs(config.fetch.timeout_secs))?;
    let sources = resolve_sources(&fetcher, &manifest_url, &tiers)
        .await
        .context("Failed to resolve sources")?;

    if sources.is_empty() {
        println!("No sources matched tier pattern '{}'", tiers);
        return Ok(());
    }

    println!("{:<6} {:<30} {}", "TIER", "SOURCE", "DESCRIPTION");
    for source in &sources {
        println!(
            "{:<6} {:<30} {}",
            source.tier,
            truncate(&source.label(), 30),
            truncate(&source.description, 50)
        );
    }
    println!();
    println!("{} sources selected by pattern '{}'", sources.len(), tiers);

    Ok(())
}
