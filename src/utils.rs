//! Common utility functions.

/// Format a count with K/M suffix for compact display.
///
/// # Examples
/// ```
/// use hostsink::utils::format_count;
/// assert_eq!(format_count(500), "500");
/// assert_eq!(format_count(1500), "1.5K");
/// assert_eq!(format_count(1_500_000), "1.5M");
/// ```
pub fn format_count(count: usize) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Truncate a string to a maximum byte length, adding "..." if truncated.
///
/// Cuts on a char boundary: manifest descriptions are third-party text
/// and may put a multibyte character anywhere.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".to_string()
    } else {
        let keep = s
            .char_indices()
            .take_while(|(i, c)| i + c.len_utf8() <= max_len - 3)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &s[..keep])
    }
}
