//! CLI command implementations.

pub mod allowlist;
pub mod blocklist;
pub mod init;
pub mod sources;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::time::Duration;

use crate::aggregator::aggregate;
use crate::config::{FetchConfig, ListSource};
use crate::dialect::OutputDialect;
use crate::fetcher::Fetch;
use crate::progress::LogProgress;

/// Run the aggregation stage under the configured overall deadline, if any.
pub(crate) async fn aggregate_with_deadline(
    fetcher: &dyn Fetch,
    sources: &[ListSource],
    dialect: &OutputDialect,
    fetch_cfg: &FetchConfig,
) -> Result<HashSet<String>> {
    let run = aggregate(fetcher, sources, dialect, &LogProgress, fetch_cfg.max_concurrent);

    match fetch_cfg.deadline_secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), run)
            .await
            .with_context(|| format!("Run deadline of {}s exceeded", secs)),
        None => Ok(run.await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::dialect::{ListKind, OutputStyle};
    use crate::error::HostsinkError;

    /// Stalls every fetch, simulating a slow list server.
    struct StalledFetcher;

    #[async_trait]
    impl Fetch for StalledFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, HostsinkError> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok("slow.example.com\n".to_string())
        }
    }

    /// Answers immediately.
    struct InstantFetcher;

    #[async_trait]
    impl Fetch for InstantFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, HostsinkError> {
            Ok("fast.example.com\n".to_string())
        }
    }

    fn sources() -> Vec<ListSource> {
        vec![ListSource {
            name: "one".to_string(),
            url: "https://lists.test/one".to_string(),
        }]
    }

    fn pihole_block() -> OutputDialect {
        OutputDialect::new(
            OutputStyle::Pihole,
            ListKind::Block,
            "0.0.0.0".parse().unwrap(),
        )
    }

    fn fetch_cfg(deadline_secs: Option<u64>) -> FetchConfig {
        FetchConfig {
            timeout_secs: 30,
            max_concurrent: 2,
            deadline_secs,
        }
    }

    #[tokio::test]
    async fn test_deadline_aborts_stalled_run() {
        let result = aggregate_with_deadline(
            &StalledFetcher,
            &sources(),
            &pihole_block(),
            &fetch_cfg(Some(0)),
        )
        .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Run deadline of 0s exceeded"));
    }

    #[tokio::test]
    async fn test_run_within_deadline_completes() {
        let entries = aggregate_with_deadline(
            &InstantFetcher,
            &sources(),
            &pihole_block(),
            &fetch_cfg(Some(60)),
        )
        .await
        .unwrap();

        assert!(entries.contains("0.0.0.0\tfast.example.com"));
    }

    #[tokio::test]
    async fn test_no_deadline_passes_through() {
        let entries = aggregate_with_deadline(
            &StalledFetcher,
            &sources(),
            &pihole_block(),
            &fetch_cfg(None),
        )
        .await
        .unwrap();

        assert_eq!(entries.len(), 1);
    }
}
