//! Error types for hostsink.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostsinkError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A single source failed to download. Recoverable: the run continues
    /// and the source contributes zero entries.
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The source manifest could not be retrieved or parsed. Fatal for a
    /// blocklist run: without it there are no sources to process.
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Writing the output artifact or rotating its backup failed. Fatal.
    #[error("Publish failed for {path}: {source}")]
    Publish {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl HostsinkError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
