//! Single-run update over already-fetched draft batches
//!
//! The core receives the loaded catalog and the per-source draft batches as
//! plain data; fetching and persistence stay at the edges.

use crate::{metrics, reconcile};
use bibsync_domain::{Catalog, PublicationDraft};

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Drafts reconciled into the catalog and the metrics block replaced.
    Updated { catalog: Catalog, incoming: usize },
    /// Every source came back empty while the stored catalog has content;
    /// the save must be skipped rather than overwrite a good catalog with
    /// no new information.
    SkippedEmptyFetch { catalog: Catalog },
}

/// Reconcile each source's batch in order, then wholesale-replace the
/// aggregate metrics.
pub fn apply_update(mut catalog: Catalog, batches: Vec<Vec<PublicationDraft>>) -> UpdateOutcome {
    let incoming: usize = batches.iter().map(Vec::len).sum();
    if incoming == 0 && !catalog.is_empty() {
        return UpdateOutcome::SkippedEmptyFetch { catalog };
    }

    for batch in batches {
        reconcile::reconcile(&mut catalog, batch);
    }
    catalog.metrics = metrics::compute_metrics(&catalog);

    UpdateOutcome::Updated { catalog, incoming }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibsync_domain::{CatalogRecord, SourceIndex};
    use proptest::prelude::*;

    fn draft(doi: &str, title: &str, index: SourceIndex) -> PublicationDraft {
        PublicationDraft {
            title: title.to_string(),
            doi: (!doi.is_empty()).then(|| doi.to_string()),
            index,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_fetch_skips_non_empty_catalog() {
        let catalog = Catalog {
            publications: vec![CatalogRecord {
                title: "Existing Paper".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let outcome = apply_update(catalog.clone(), vec![vec![], vec![]]);
        assert_eq!(outcome, UpdateOutcome::SkippedEmptyFetch { catalog });
    }

    #[test]
    fn test_empty_fetch_on_empty_catalog_still_updates() {
        let outcome = apply_update(Catalog::default(), vec![vec![]]);
        match outcome {
            UpdateOutcome::Updated { catalog, incoming } => {
                assert_eq!(incoming, 0);
                assert_eq!(catalog.metrics["document_count"], "0");
            }
            other => panic!("expected Updated, got {:?}", other),
        }
    }

    #[test]
    fn test_metrics_replaced_wholesale() {
        let mut catalog = Catalog::default();
        catalog
            .metrics
            .insert("stale_metric".to_string(), "1".to_string());

        let mut d = draft("10.1/a", "Paper A", SourceIndex::Scopus);
        d.citations = Some("5".to_string());
        let outcome = apply_update(catalog, vec![vec![d]]);

        match outcome {
            UpdateOutcome::Updated { catalog, .. } => {
                assert!(!catalog.metrics.contains_key("stale_metric"));
                assert_eq!(catalog.metrics["total_citations"], "5");
                assert_eq!(catalog.metrics["document_count"], "1");
            }
            other => panic!("expected Updated, got {:?}", other),
        }
    }

    fn arb_draft() -> impl Strategy<Value = PublicationDraft> {
        (
            "[a-z ]{0,12}",
            proptest::option::of("10\\.[0-9]{1,4}/[a-z0-9]{1,6}"),
            proptest::option::of("[0-9]{1,3}"),
            0u8..4,
        )
            .prop_map(|(title, doi, citations, tier)| PublicationDraft {
                title,
                doi,
                citations,
                index: match tier {
                    3 => SourceIndex::Sci,
                    2 => SourceIndex::Scopus,
                    1 => SourceIndex::Trdizin,
                    _ => SourceIndex::Other,
                },
                ..Default::default()
            })
    }

    proptest! {
        /// reconcile is deterministic: the same catalog and batch always
        /// converge to the same result.
        #[test]
        fn prop_deterministic(drafts in proptest::collection::vec(arb_draft(), 0..20)) {
            let a = apply_update(Catalog::default(), vec![drafts.clone()]);
            let b = apply_update(Catalog::default(), vec![drafts]);
            prop_assert_eq!(a, b);
        }

        /// Applying the same batch a second time changes nothing.
        #[test]
        fn prop_idempotent(drafts in proptest::collection::vec(arb_draft(), 0..20)) {
            let once = match apply_update(Catalog::default(), vec![drafts.clone()]) {
                UpdateOutcome::Updated { catalog, .. } => catalog,
                UpdateOutcome::SkippedEmptyFetch { catalog } => catalog,
            };
            let twice = match apply_update(once.clone(), vec![drafts]) {
                UpdateOutcome::Updated { catalog, .. } => catalog,
                UpdateOutcome::SkippedEmptyFetch { catalog } => catalog,
            };
            prop_assert_eq!(once, twice);
        }
    }
}
