//! bibsync-core: reconciliation engine for the bibsync publication catalog
//!
//! This library provides the pieces of the catalog update pipeline:
//! - Canonical key derivation (DOI first, title fallback)
//! - Quality filtering of garbage records
//! - Field-by-field reconciliation of incoming drafts
//! - Author-level aggregate metrics
//! - Durable JSON catalog storage with legacy-shape upgrade
//! - Source adapters for Scopus, TR Dizin, and Web of Science
//!
//! Control flow: adapters -> quality filter -> key derivation -> reconcile
//! against the loaded catalog -> sort -> save.

pub mod config;
pub mod http;
pub mod identity;
pub mod metrics;
pub mod quality;
pub mod reconcile;
pub mod sources;
pub mod store;
pub mod update;

// Re-export main types for convenience
pub use config::UpdaterConfig;
pub use http::{HttpClient, HttpError, HttpResponse};
pub use metrics::compute_metrics;
pub use quality::MIN_TITLE_LEN;
pub use reconcile::reconcile;
pub use sources::{ScopusSource, SourceAdapter, SourceError, TrdizinSource, WosSource};
pub use store::{CatalogStore, StoreError};
pub use update::{apply_update, UpdateOutcome};
