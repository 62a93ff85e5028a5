//! Catalog reconciliation: keyed insert-or-merge of incoming drafts
//!
//! For each draft, in input order: reject garbage, derive the canonical
//! key, then either insert the draft verbatim (novel key) or merge it
//! field-by-field into the existing record. The merge is monotonic; it
//! never erases previously known information.

use crate::{identity, quality};
use bibsync_domain::{Catalog, CatalogRecord, PublicationDraft};
use std::collections::HashMap;

/// Reconcile a batch of incoming drafts into the catalog.
///
/// Malformed drafts (un-keyed or below the quality threshold) are skipped;
/// this function never fails on bad input.
pub fn reconcile(catalog: &mut Catalog, drafts: Vec<PublicationDraft>) {
    let mut index: HashMap<String, usize> = HashMap::with_capacity(catalog.len());
    for (i, record) in catalog.publications.iter().enumerate() {
        if let Some(key) = identity::record_key(record) {
            index.insert(key, i);
        }
    }

    for draft in drafts {
        if !quality::is_acceptable_title(&draft.title) {
            continue;
        }
        let Some(key) = identity::draft_key(&draft) else {
            continue;
        };

        match index.get(&key) {
            Some(&i) => merge_into(&mut catalog.publications[i], draft),
            None => {
                index.insert(key, catalog.publications.len());
                catalog.publications.push(CatalogRecord::from(draft));
            }
        }
    }
}

/// Per-field merge policy for a draft whose key matches an existing record.
fn merge_into(existing: &mut CatalogRecord, incoming: PublicationDraft) {
    // Citation counts are time-varying; the newest fetch is authoritative.
    if let Some(citations) = non_blank(incoming.citations) {
        existing.citations = Some(citations);
    }

    // Enrichment fields fill once and then stay put, so a transient outage
    // of one source cannot blank out an established value.
    fill_once(&mut existing.journal, incoming.journal);
    fill_once(&mut existing.scopus_link, incoming.scopus_link);
    fill_once(&mut existing.trdizin_link, incoming.trdizin_link);
    fill_once(&mut existing.wos_link, incoming.wos_link);

    // A higher-fidelity source may replace a placeholder author string.
    if !incoming.author.trim().is_empty() {
        existing.author = incoming.author;
    }

    // Classification is only promoted toward stricter tiers.
    if incoming.index.rank() > existing.index.rank() {
        existing.index = incoming.index;
    }

    // title, doi and year were the basis of the key match; incoming values
    // are ignored.
}

fn fill_once(slot: &mut Option<String>, incoming: Option<String>) {
    let vacant = slot.as_deref().map_or(true, |s| s.trim().is_empty());
    if vacant {
        if let Some(value) = non_blank(incoming) {
            *slot = Some(value);
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
