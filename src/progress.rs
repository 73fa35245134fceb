//! Pipeline progress reporting.
//!
//! The pipeline itself stays pure: it never prints. Observability is an
//! observer the caller injects, so the same aggregation code runs under
//! the CLI (tracing output) and under tests (silence).

use tracing::{info, warn};

use crate::error::HostsinkError;

/// Observer for per-source pipeline events.
pub trait Progress: Send + Sync {
    /// A source was fetched and normalized; `entries` is the number of
    /// canonical hostnames it contributed before deduplication.
    fn source_ok(&self, name: &str, entries: usize);

    /// A source failed to fetch and was dropped for this run.
    fn source_failed(&self, name: &str, error: &HostsinkError);
}

/// Logs events through tracing, the CLI default.
#[derive(Default, Clone, Copy)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn source_ok(&self, name: &str, entries: usize) {
        info!("[ok] {} - {} entries", name, entries);
    }

    fn source_failed(&self, name: &str, error: &HostsinkError) {
        warn!("[err] {} - {}", name, error);
    }
}

/// Discards all events. Used in tests and benchmarks.
#[derive(Default, Clone, Copy)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn source_ok(&self, _name: &str, _entries: usize) {}

    fn source_failed(&self, _name: &str, _error: &HostsinkError) {}
}
