//! Line normalization for raw host list bodies.
//!
//! Remote lists arrive in a superset of the hosts-file format: plain
//! hostnames, `0.0.0.0 host` or `127.0.0.1 host` mappings, IPv6 null
//! routes, comments, and blank padding. Normalization reduces every line
//! to a canonical hostname or drops it.

use std::net::IpAddr;

/// Hosts-file block prefixes stripped from the start of a line.
const BLOCK_PREFIXES: &[&str] = &["0.0.0.0", "127.0.0.1"];

/// Normalize one fetched list body into canonical hostname entries.
///
/// Returns a lazy single-pass iterator over `body`; ordering is not
/// meaningful since downstream deduplication is order-insensitive.
///
/// Per line:
/// 1. blank or whitespace-only lines are dropped;
/// 2. IPv6 null-route lines (`::` prefix) are dropped;
/// 3. comment lines (`#` prefix) are dropped;
/// 4. trailing `#...` inline comments are stripped;
/// 5. a leading `0.0.0.0` or `127.0.0.1` token is stripped;
/// 6. the first remaining token, lowercased, is the entry; lines that
///    strip down to nothing or to a bare IP address are dropped.
pub fn normalize(body: &str) -> impl Iterator<Item = String> + '_ {
    body.lines().filter_map(normalize_line)
}

/// Normalize a single physical line. `None` means the line carries no
/// hostname.
pub fn normalize_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("::") || line.starts_with('#') {
        return None;
    }

    // Strip inline comment before tokenizing.
    let line = match line.find('#') {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    };

    let mut tokens = line.split_whitespace();
    let mut candidate = tokens.next()?;
    if BLOCK_PREFIXES.contains(&candidate) {
        candidate = tokens.next()?;
    }

    // A bare IP line (e.g. `8.8.8.8`) is not a hostname entry, and neither
    // is an IPv6 token surviving a prefix strip.
    if candidate.starts_with("::") || candidate.parse::<IpAddr>().is_ok() {
        return None;
    }

    Some(candidate.to_ascii_lowercase())
}
