//! Deduplicating aggregation of normalized host list sources.

use futures::stream::{self, StreamExt};
use std::collections::HashSet;

use crate::config::ListSource;
use crate::dialect::OutputDialect;
use crate::fetcher::Fetch;
use crate::normalizer::normalize;
use crate::progress::Progress;

/// Default bound on concurrent list downloads. Fetches are independent and
/// network-latency-bound, but unbounded fan-out risks rate limiting from
/// list servers and high peak memory.
pub const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Fold every source into a single set of rendered output lines.
///
/// Sources are fetched concurrently (`buffer_unordered`, bounded by
/// `max_concurrent`); normalization and set insertion happen on the single
/// consuming task, so the accumulator needs no lock. Insertion is
/// idempotent: however many sources carry the same hostname, the set holds
/// one rendered entry for it.
///
/// A source that fails to fetch is reported through `progress` and
/// contributes zero entries; per-source failures never abort the run.
pub async fn aggregate(
    fetcher: &dyn Fetch,
    sources: &[ListSource],
    dialect: &OutputDialect,
    progress: &dyn Progress,
    max_concurrent: usize,
) -> HashSet<String> {
    let mut entries = HashSet::new();

    let mut results = stream::iter(
        sources
            .iter()
            .map(|source| async move { (source, fetcher.fetch(&source.url).await) }),
    )
    .buffer_unordered(max_concurrent.max(1));

    while let Some((source, result)) = results.next().await {
        match result {
            Ok(body) => {
                let mut contributed = 0usize;
                for host in normalize(&body) {
                    entries.insert(dialect.render(&host));
                    contributed += 1;
                }
                progress.source_ok(&source.name, contributed);
            }
            Err(e) => progress.source_failed(&source.name, &e),
        }
    }

    entries
}
