//! Durable JSON catalog storage
//!
//! The store tolerates a missing or corrupt file by answering with an empty
//! catalog; a bad store is "nothing learned yet", never fatal. Saving writes
//! the destination exactly once at the end of a run, so a crash beforehand
//! leaves the previous state untouched.

use crate::{identity, quality};
use bibsync_domain::{Catalog, CatalogRecord};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to write catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the prior catalog from disk.
    ///
    /// Missing file and unparsable content both yield an empty catalog. A
    /// legacy bare-array encoding is upgraded transparently. Every loaded
    /// record passes the quality filter, so garbage admitted by earlier
    /// runs is purged here.
    pub fn load(&self) -> Catalog {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Catalog::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read catalog; starting empty");
                return Catalog::default();
            }
        };

        let Some(catalog) = parse_catalog(&text) else {
            warn!(path = %self.path.display(), "catalog is not valid JSON; starting empty");
            return Catalog::default();
        };

        normalize(catalog)
    }

    /// Serialize the catalog, publications sorted newest-first, as
    /// pretty-printed UTF-8 JSON with non-ASCII characters verbatim.
    pub fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let mut output = catalog.clone();
        output.sort_by_year_desc();

        let json = serde_json::to_string_pretty(&output)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Parse the current `{metrics, publications}` shape, falling back to the
/// legacy bare array of records.
fn parse_catalog(text: &str) -> Option<Catalog> {
    if let Ok(catalog) = serde_json::from_str::<Catalog>(text) {
        return Some(catalog);
    }
    serde_json::from_str::<Vec<CatalogRecord>>(text)
        .ok()
        .map(|publications| Catalog {
            publications,
            ..Default::default()
        })
}

/// Apply the quality filter and collapse duplicate canonical keys.
///
/// Later duplicates replace earlier ones in place (matching dict-insertion
/// semantics of prior catalog writers) and keep the first occurrence's
/// position, preserving relative order for the save-time sort.
fn normalize(catalog: Catalog) -> Catalog {
    let mut publications: Vec<CatalogRecord> = Vec::with_capacity(catalog.publications.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in catalog.publications {
        if !quality::is_acceptable_title(&record.title) {
            continue;
        }
        let Some(key) = identity::record_key(&record) else {
            continue;
        };
        match index.get(&key) {
            Some(&i) => publications[i] = record,
            None => {
                index.insert(key, publications.len());
                publications.push(record);
            }
        }
    }

    Catalog {
        metrics: catalog.metrics,
        publications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibsync_domain::SourceIndex;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CatalogStore {
        CatalogStore::new(dir.path().join("publications.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_legacy_array_is_upgraded() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"title": "Paper A", "doi": "10.1/a", "index": "scopus"}]"#,
        )
        .unwrap();

        let catalog = store.load();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.metrics.is_empty());
        assert_eq!(catalog.publications[0].index, SourceIndex::Scopus);
    }

    #[test]
    fn test_load_purges_garbage_titles() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"title": "Real Paper Title"}, {"title": "??"}, {"title": ""}]"#,
        )
        .unwrap();

        let catalog = store.load();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.publications[0].title, "Real Paper Title");
    }

    #[test]
    fn test_load_collapses_duplicate_keys() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"title": "Paper A", "doi": "10.1/a", "year": "2020"},
                {"title": "Paper A", "doi": "10.1/A", "year": "2021"}]"#,
        )
        .unwrap();

        let catalog = store.load();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.publications[0].year, "2021");
    }

    #[test]
    fn test_save_sorts_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let catalog = Catalog {
            publications: vec![
                CatalogRecord {
                    title: "Older Paper".to_string(),
                    year: "2021".to_string(),
                    ..Default::default()
                },
                CatalogRecord {
                    title: "Newer Paper".to_string(),
                    year: "2023".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        store.save(&catalog).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.publications[0].title, "Newer Paper");
        assert_eq!(loaded.publications[1].title, "Older Paper");
    }

    #[test]
    fn test_save_preserves_non_ascii() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let catalog = Catalog {
            publications: vec![CatalogRecord {
                title: "Türkiye'de yükseköğretim üzerine bir çalışma".to_string(),
                author: "Erişkin, E.".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        store.save(&catalog).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("Türkiye'de yükseköğretim üzerine bir çalışma"));
        assert!(text.contains("Erişkin, E."));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_save_writes_metrics_block() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut catalog = Catalog::default();
        catalog
            .metrics
            .insert("h_index".to_string(), "4".to_string());
        store.save(&catalog).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.metrics["h_index"], "4");
    }
}
