//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::dialect::OutputStyle;

#[derive(Parser)]
#[command(name = "hostsink")]
#[command(author, version, about = "Aggregate remote host lists into Pi-hole or Unbound artifacts")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "/etc/hostsink/config.yaml", global = true)]
    pub config: PathBuf,

    /// Quiet mode (for cron/systemd timer)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the aggregated blocklist artifact from the source manifest
    Blocklist {
        /// Output style override (pihole, unbound)
        #[arg(long)]
        style: Option<OutputStyle>,

        /// Output file override
        #[arg(long)]
        output: Option<PathBuf>,

        /// Tier selection pattern override (e.g. "tick", "tick|std")
        #[arg(long)]
        tiers: Option<String>,

        /// Manifest URL override
        #[arg(long)]
        manifest_url: Option<String>,

        /// Fetch and aggregate but don't publish
        #[arg(long)]
        dry_run: bool,
    },

    /// Build the aggregated allowlist artifact from configured sources
    Allowlist {
        /// Output style override (pihole, unbound)
        #[arg(long)]
        style: Option<OutputStyle>,

        /// Output file override
        #[arg(long)]
        output: Option<PathBuf>,

        /// Fetch and aggregate but don't publish
        #[arg(long)]
        dry_run: bool,
    },

    /// List the manifest sources selected by the tier filter
    Sources {
        /// Tier selection pattern override
        #[arg(long)]
        tiers: Option<String>,

        /// Manifest URL override
        #[arg(long)]
        manifest_url: Option<String>,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show version
    Version,
}
