//! Configuration management for hostsink.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::dialect::{ListKind, OutputStyle};

/// Default manifest of candidate block list sources (category, tier,
/// origin, description, url). Maintained by a third party; its tier tag
/// vocabulary (`tick`, `std`, `cross`) is matched, never enumerated.
pub const DEFAULT_MANIFEST_URL: &str = "https://v.firebog.net/hosts/csv.txt";

/// Most conservative tier: sources needing little to no manual
/// allowlisting afterwards.
pub const DEFAULT_TIER_PATTERN: &str = "tick";

/// Main configuration structure, loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output format family (pihole, unbound)
    pub style: OutputStyle,

    /// Blocklist pipeline settings
    pub blocklist: BlocklistConfig,

    /// Allowlist pipeline settings
    pub allowlist: AllowlistConfig,

    /// HTTP fetch settings
    pub fetch: FetchConfig,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults.
    ///
    /// hostsink is usable with zero configuration; the file only overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.blocklist.manifest_url.starts_with("https://") {
            anyhow::bail!(
                "Manifest URL must use HTTPS: {}",
                self.blocklist.manifest_url
            );
        }

        for source in &self.allowlist.sources {
            if !source.url.starts_with("https://") {
                anyhow::bail!(
                    "Allowlist source '{}' URL must use HTTPS: {}",
                    source.name,
                    source.url
                );
            }
        }

        if let Err(e) = Regex::new(&self.blocklist.tiers) {
            anyhow::bail!("Invalid tier pattern '{}': {}", self.blocklist.tiers, e);
        }

        if self.fetch.max_concurrent == 0 {
            anyhow::bail!("fetch.max_concurrent must be at least 1");
        }

        Ok(())
    }

    /// Save configuration to a YAML file atomically.
    ///
    /// Uses tempfile + rename to prevent corruption on crash.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        let parent_dir = path.parent().unwrap_or(Path::new("."));
        let mut temp_file = NamedTempFile::new_in(parent_dir)
            .context("Failed to create temporary file for config")?;

        temp_file.write_all(content.as_bytes())?;
        temp_file.as_file().sync_all()?;

        temp_file
            .persist(path)
            .with_context(|| format!("Failed to persist config file: {:?}", path))?;

        Ok(())
    }

    /// Resolve the output path for an artifact, honoring the configured
    /// override and falling back to a style-dependent default.
    pub fn output_path(&self, style: OutputStyle, kind: ListKind) -> PathBuf {
        let configured = match kind {
            ListKind::Block => &self.blocklist.output,
            ListKind::Allow => &self.allowlist.output,
        };
        if let Some(path) = configured {
            return path.clone();
        }
        default_output(style, kind)
    }

    /// Generate the default config template with comments.
    pub fn generate_default_yaml() -> String {
        include_str!("../templates/config.yaml").to_string()
    }
}

/// Default artifact paths per style and list kind.
pub fn default_output(style: OutputStyle, kind: ListKind) -> PathBuf {
    let name = match (style, kind) {
        (OutputStyle::Pihole, ListKind::Block) => "hostsink.block.hosts",
        (OutputStyle::Pihole, ListKind::Allow) => "hostsink.allow.txt",
        (OutputStyle::Unbound, ListKind::Block) => "hostsink.block.conf",
        (OutputStyle::Unbound, ListKind::Allow) => "hostsink.allow.conf",
    };
    PathBuf::from(name)
}

/// A named list source with a fixed URL. Used for the statically
/// configured allowlist sources; blocklist sources come from the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListSource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlocklistConfig {
    /// Manifest URL enumerating candidate sources
    pub manifest_url: String,

    /// Tier selection pattern matched against each manifest row's tier tag
    pub tiers: String,

    /// Output path override; style-dependent default when unset
    pub output: Option<PathBuf>,

    /// Address mapped to blocked hostnames in the pihole dialect
    pub sinkhole_address: IpAddr,
}

impl Default for BlocklistConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            tiers: DEFAULT_TIER_PATTERN.to_string(),
            output: None,
            sinkhole_address: IpAddr::from([0, 0, 0, 0]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowlistConfig {
    /// Static allowlist sources (no manifest for the allowlist pipeline)
    pub sources: Vec<ListSource>,

    /// Output path override; style-dependent default when unset
    pub output: Option<PathBuf>,
}

impl Default for AllowlistConfig {
    fn default() -> Self {
        Self {
            sources: default_allowlist_sources(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Bound on concurrent list downloads
    pub max_concurrent: usize,

    /// Optional overall deadline for a whole aggregation run, in seconds
    pub deadline_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_concurrent: crate::aggregator::DEFAULT_MAX_CONCURRENT,
            deadline_secs: None,
        }
    }
}

fn default_allowlist_sources() -> Vec<ListSource> {
    vec![
        ListSource {
            name: "anudeepND_whitelist".to_string(),
            url: "https://raw.githubusercontent.com/anudeepND/whitelist/master/domains/whitelist.txt"
                .to_string(),
        },
        ListSource {
            name: "anudeepND_optional".to_string(),
            url: "https://raw.githubusercontent.com/anudeepND/whitelist/master/domains/optional-list.txt"
                .to_string(),
        },
    ]
}
