//! # hostsink - Host List Aggregator for DNS-Level Content Filters
//!
//! Aggregates multiple remotely hosted plaintext host lists (block or
//! allow lists) into a single deduplicated, normalized artifact consumed
//! by Pi-hole (hosts-file mapping) or Unbound (local-zone directives).
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        hostsink                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CLI (clap)                                                 │
//! │    └── Commands: blocklist, allowlist, sources, init        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Config (serde_yaml)                                        │
//! │    └── Style, tier pattern, sources, fetch limits           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Manifest (regex tier filter)                               │
//! │    └── CSV manifest -> filtered SourceDescriptors           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Fetcher (reqwest + rustls, Fetch trait)                    │
//! │    └── Bounded concurrent downloads, per-source isolation   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Normalizer -> Aggregator (dialect rendering + dedup)       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Publisher                                                  │
//! │    └── .bak rotation, sorted line artifact                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed source fetch never aborts a run; only the manifest fetch
//! (blocklist pipeline) and artifact publication are fatal.
//!
//! ## Example Usage
//!
//! ```no_run
//! use hostsink::aggregator::aggregate;
//! use hostsink::config::Config;
//! use hostsink::dialect::{ListKind, OutputDialect};
//! use hostsink::fetcher::HttpFetcher;
//! use hostsink::manifest::resolve_sources;
//! use hostsink::progress::LogProgress;
//! use hostsink::publisher::publish;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("/etc/hostsink/config.yaml")?;
//!     let fetcher = HttpFetcher::new(Duration::from_secs(config.fetch.timeout_secs))?;
//!
//!     let descriptors = resolve_sources(
//!         &fetcher,
//!         &config.blocklist.manifest_url,
//!         &config.blocklist.tiers,
//!     )
//!     .await?;
//!
//!     let sources: Vec<_> = descriptors
//!         .iter()
//!         .map(|d| hostsink::config::ListSource { name: d.label(), url: d.url.clone() })
//!         .collect();
//!
//!     let dialect = OutputDialect::new(
//!         config.style,
//!         ListKind::Block,
//!         config.blocklist.sinkhole_address,
//!     );
//!     let entries = aggregate(&fetcher, &sources, &dialect, &LogProgress, 8).await;
//!     publish(std::path::Path::new("hostsink.block.hosts"), &entries)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`aggregator`] - Deduplicating fold of all sources into rendered lines
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration parsing and validation
//! - [`dialect`] - Output rendering strategies (pihole/unbound x block/allow)
//! - [`fetcher`] - HTTP client and the `Fetch` abstraction
//! - [`lock`] - Per-artifact locking for concurrent run prevention
//! - [`manifest`] - Source manifest parsing and tier filtering
//! - [`normalizer`] - Raw list line -> canonical hostname
//! - [`progress`] - Pipeline observability separated from control flow
//! - [`publisher`] - Artifact writing with backup rotation
//! - [`utils`] - Formatting helpers

pub mod aggregator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dialect;
pub mod error;
pub mod fetcher;
pub mod lock;
pub mod manifest;
pub mod normalizer;
pub mod progress;
pub mod publisher;
pub mod utils;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::HostsinkError;
