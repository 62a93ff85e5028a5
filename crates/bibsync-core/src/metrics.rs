//! Author-level aggregate metrics
//!
//! The metrics block is recomputed from the catalog on every run and
//! wholesale-replaces the stored one. Values are kept as decimal strings to
//! match the persisted catalog format.

use bibsync_domain::Catalog;
use std::collections::BTreeMap;

/// Compute `h_index`, `total_citations`, and `document_count` from the
/// catalog's citation counts. Non-numeric counts read as zero.
pub fn compute_metrics(catalog: &Catalog) -> BTreeMap<String, String> {
    let mut counts: Vec<u64> = catalog
        .publications
        .iter()
        .map(|r| {
            r.citations
                .as_deref()
                .and_then(|c| c.trim().parse().ok())
                .unwrap_or(0)
        })
        .collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let total: u64 = counts.iter().sum();
    let h_index = counts
        .iter()
        .enumerate()
        .take_while(|&(i, &c)| c >= i as u64 + 1)
        .count();

    BTreeMap::from([
        ("document_count".to_string(), catalog.len().to_string()),
        ("h_index".to_string(), h_index.to_string()),
        ("total_citations".to_string(), total.to_string()),
    ])
}
