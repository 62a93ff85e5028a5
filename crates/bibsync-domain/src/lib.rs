//! Domain types for the bibsync publication catalog
//!
//! This crate provides the canonical data model shared by the
//! reconciliation engine, the catalog store, and the source adapters:
//! - PublicationDraft: normalized output of a source adapter
//! - CatalogRecord: a persisted publication, addressed by canonical key
//! - SourceIndex: the ranked classification tier of a record
//! - Catalog: the aggregate of all records plus author-level metrics

pub mod catalog;
pub mod record;
pub mod source_index;

pub use catalog::*;
pub use record::*;
pub use source_index::*;
