//! Source manifest resolution for the blocklist pipeline.
//!
//! The manifest is a CSV document enumerating candidate block list
//! sources, five columns per record: category, tier, origin, description,
//! url. Tier tags (`tick`, `std`, `cross`, ...) classify how much manual
//! allowlisting a source typically needs; the vocabulary is owned by the
//! manifest provider, so tiers are matched against a user-supplied pattern
//! instead of a hardcoded enum.

use regex::Regex;
use tracing::debug;

use crate::error::HostsinkError;
use crate::fetcher::Fetch;

/// Expected column count of a manifest record.
const MANIFEST_COLUMNS: usize = 5;

/// One candidate source from the manifest, in manifest column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub category: String,
    pub tier: String,
    pub origin: String,
    pub description: String,
    pub url: String,
}

impl SourceDescriptor {
    /// Short display name used in status reporting.
    pub fn label(&self) -> String {
        format!("{}/{}", self.category, self.origin)
    }
}

/// Fetch the manifest and return the descriptors whose tier matches
/// `tier_pattern`, in manifest order.
///
/// Unlike per-source fetches, a manifest failure is fatal: without it
/// there are no sources to process. Duplicate URLs are kept; content-level
/// dedup in the aggregator makes them harmless.
pub async fn resolve_sources(
    fetcher: &dyn Fetch,
    manifest_url: &str,
    tier_pattern: &str,
) -> Result<Vec<SourceDescriptor>, HostsinkError> {
    let tier_filter = Regex::new(tier_pattern)
        .map_err(|e| HostsinkError::Config(format!("Invalid tier pattern '{}': {}", tier_pattern, e)))?;

    let body = fetcher
        .fetch(manifest_url)
        .await
        .map_err(|e| HostsinkError::Manifest(format!("Failed to fetch manifest: {}", e)))?;

    let sources = parse_manifest(&body)?;
    debug!("Manifest yielded {} candidate sources", sources.len());

    Ok(sources
        .into_iter()
        .filter(|s| tier_filter.is_match(&s.tier))
        .collect())
}

/// Parse the manifest body into descriptors without tier filtering.
///
/// A header row needs no special handling here: it parses like any other
/// five-column record and is discarded later because its tier cell does
/// not match any tier pattern.
pub fn parse_manifest(body: &str) -> Result<Vec<SourceDescriptor>, HostsinkError> {
    let mut sources = Vec::new();

    for (lineno, line) in body.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_record(line);
        if fields.len() != MANIFEST_COLUMNS {
            return Err(HostsinkError::Manifest(format!(
                "Line {}: expected {} columns, found {}",
                lineno + 1,
                MANIFEST_COLUMNS,
                fields.len()
            )));
        }

        let mut fields = fields.into_iter();
        sources.push(SourceDescriptor {
            category: fields.next().unwrap_or_default(),
            tier: fields.next().unwrap_or_default(),
            origin: fields.next().unwrap_or_default(),
            description: fields.next().unwrap_or_default(),
            url: fields.next().unwrap_or_default(),
        });
    }

    Ok(sources)
}

/// Split one CSV record into trimmed fields, honoring double-quoted cells
/// (descriptions legitimately contain commas) and `""` escapes.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current).trim().to_string());
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
