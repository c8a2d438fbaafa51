use std::sync::Arc;

use futures::{stream, StreamExt};
use tracing::{error, info};

use super::detail::CountryLookup;
use super::extract::extract_entry;
use crate::models::{MovieRecord, PLACEHOLDER};

/// Parallel map with per-entry failure isolation: every fragment is
/// processed independently under a bounded fan-out, entries that cannot
/// be recognized are dropped, and the survivors come back in submission
/// order. An individual failure never aborts its siblings.
pub async fn extract_all(
    fragments: Vec<String>,
    lookup: Option<Arc<dyn CountryLookup>>,
    workers: usize,
) -> Vec<MovieRecord> {
    let mut results: Vec<(usize, MovieRecord)> =
        stream::iter(fragments.into_iter().enumerate())
            .map(|(index, fragment)| {
                let lookup = lookup.clone();
                async move {
                    let record = process_entry(&fragment, lookup.as_deref(), index).await;
                    (index, record)
                }
            })
            .buffer_unordered(workers.max(1))
            .filter_map(|(index, record)| async move { record.map(|r| (index, r)) })
            .collect()
            .await;

    // Completion order is latency-dependent; restore submission order so
    // the export is reproducible across runs.
    results.sort_unstable_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, record)| record).collect()
}

async fn process_entry(
    fragment: &str,
    lookup: Option<&dyn CountryLookup>,
    index: usize,
) -> Option<MovieRecord> {
    // The fragment is parsed and drained before the first await; the
    // document tree is not Send and must not live across a suspension.
    let Some(entry) = extract_entry(fragment) else {
        error!("Error processing entry at position {index}: no chart entry in fragment");
        return None;
    };

    let country = match (lookup, entry.detail_href.as_deref()) {
        (Some(lookup), Some(href)) => lookup.country_of(href).await,
        _ => PLACEHOLDER.to_string(),
    };

    let record = MovieRecord {
        name: entry.name,
        rating: entry.rating,
        votes: entry.votes,
        year: entry.year,
        genre: entry.genre,
        country,
    };
    info!("Processed movie: {}", record.name);
    Some(record)
}
