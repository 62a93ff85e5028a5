//! Catalog aggregate

use super::CatalogRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full publication catalog as persisted on disk.
///
/// `publications` keeps insertion order so that the year sort at save time
/// breaks ties by original relative order. `metrics` is wholesale-replaced
/// on every run, never field-merged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub metrics: BTreeMap<String, String>,
    #[serde(default)]
    pub publications: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }

    /// Sort publications newest-first by lexicographic comparison of the
    /// 4-character year string. Stable: ties keep their relative order, and
    /// records without a year sink to the end.
    pub fn sort_by_year_desc(&mut self) {
        self.publications.sort_by(|a, b| b.year.cmp(&a.year));
    }
}
