//! Output dialect rendering for aggregated hostnames.
//!
//! A dialect is the pairing of an output style (Pi-hole hosts-file mapping
//! vs. Unbound local-zone directives) with a list kind (block vs. allow).
//! Rendering is centralized here so every template stays testable in one
//! place instead of being scattered as string concatenation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Output format family, selectable from config or CLI.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Hosts-file style mapping consumed by Pi-hole and dnsmasq.
    #[default]
    Pihole,
    /// `local-zone`/`local-data` directives for Unbound.
    Unbound,
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputStyle::Pihole => write!(f, "pihole"),
            OutputStyle::Unbound => write!(f, "unbound"),
        }
    }
}

impl std::str::FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pihole" => Ok(OutputStyle::Pihole),
            "unbound" => Ok(OutputStyle::Unbound),
            other => Err(format!(
                "Unknown output style '{}'. Valid values: pihole, unbound",
                other
            )),
        }
    }
}

/// Whether the artifact blocks or allows the listed hostnames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Block,
    Allow,
}

/// A fully resolved rendering strategy for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDialect {
    /// `{addr}\t{host}` hosts-file line. The sinkhole address is a config
    /// knob; `0.0.0.0` by default, historically `127.0.0.1`.
    PiholeBlock { sinkhole: IpAddr },
    /// Bare hostname, one per line.
    PiholeAllow,
    /// Three-line redirect block routing the zone to the null address.
    UnboundBlock,
    /// `always_transparent` zone override.
    UnboundAllow,
}

impl OutputDialect {
    pub fn new(style: OutputStyle, kind: ListKind, sinkhole: IpAddr) -> Self {
        match (style, kind) {
            (OutputStyle::Pihole, ListKind::Block) => OutputDialect::PiholeBlock { sinkhole },
            (OutputStyle::Pihole, ListKind::Allow) => OutputDialect::PiholeAllow,
            (OutputStyle::Unbound, ListKind::Block) => OutputDialect::UnboundBlock,
            (OutputStyle::Unbound, ListKind::Allow) => OutputDialect::UnboundAllow,
        }
    }

    /// Render one canonical hostname into its output form.
    ///
    /// The Unbound block dialect produces a multi-line string so that
    /// deduplication in the aggregate set stays per-hostname.
    pub fn render(&self, host: &str) -> String {
        match self {
            OutputDialect::PiholeBlock { sinkhole } => format!("{}\t{}", sinkhole, host),
            OutputDialect::PiholeAllow => host.to_string(),
            OutputDialect::UnboundBlock => format!(
                "local-zone: \"{host}\" redirect\nlocal-data: \"{host}. IN A 0.0.0.0\"\nlocal-data: \"{host}. IN AAAA ::\""
            ),
            OutputDialect::UnboundAllow => {
                format!("local-zone: \"{host}\" always_transparent")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn null_addr() -> IpAddr {
        "0.0.0.0".parse().unwrap()
    }

    #[test]
    fn test_pihole_block_renders_tab_mapping() {
        let dialect = OutputDialect::new(OutputStyle::Pihole, ListKind::Block, null_addr());
        assert_eq!(dialect.render("ads.example.com"), "0.0.0.0\tads.example.com");
    }

    #[test]
    fn test_pihole_block_custom_sinkhole() {
        let loopback: IpAddr = "127.0.0.1".parse().unwrap();
        let dialect = OutputDialect::new(OutputStyle::Pihole, ListKind::Block, loopback);
        assert_eq!(dialect.render("ads.example.com"), "127.0.0.1\tads.example.com");
    }

    #[test]
    fn test_pihole_allow_renders_bare_hostname() {
        let dialect = OutputDialect::new(OutputStyle::Pihole, ListKind::Allow, null_addr());
        assert_eq!(dialect.render("good.example.com"), "good.example.com");
    }

    #[test]
    fn test_unbound_block_renders_three_lines() {
        let dialect = OutputDialect::new(OutputStyle::Unbound, ListKind::Block, null_addr());
        let rendered = dialect.render("ads.example.com");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "local-zone: \"ads.example.com\" redirect");
        assert_eq!(lines[1], "local-data: \"ads.example.com. IN A 0.0.0.0\"");
        assert_eq!(lines[2], "local-data: \"ads.example.com. IN AAAA ::\"");
    }

    #[test]
    fn test_unbound_allow_renders_transparent_zone() {
        let dialect = OutputDialect::new(OutputStyle::Unbound, ListKind::Allow, null_addr());
        assert_eq!(
            dialect.render("good.example.com"),
            "local-zone: \"good.example.com\" always_transparent"
        );
    }

    #[test]
    fn test_output_style_from_str() {
        assert_eq!("pihole".parse::<OutputStyle>().unwrap(), OutputStyle::Pihole);
        assert_eq!("Unbound".parse::<OutputStyle>().unwrap(), OutputStyle::Unbound);
        assert!("bind".parse::<OutputStyle>().is_err());
    }

    #[test]
    fn test_distinct_hosts_render_distinct_lines() {
        // Hostname appears verbatim in every dialect, so distinct hosts can
        // never collide in the aggregate set.
        let dialect = OutputDialect::new(OutputStyle::Unbound, ListKind::Block, null_addr());
        assert_ne!(dialect.render("a.example.com"), dialect.render("b.example.com"));
    }
}
