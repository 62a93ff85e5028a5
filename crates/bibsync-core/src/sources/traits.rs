//! Common traits for source adapters

use crate::http::{HttpClient, HttpError};
use async_trait::async_trait;
use bibsync_domain::PublicationDraft;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("missing credentials: {0} is not set")]
    MissingCredentials(&'static str),
    #[error("unexpected status {0}")]
    Status(u16),
}

/// A source adapter turns one index's native response into normalized
/// publication drafts.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Stable identifier used in logs.
    fn id(&self) -> &'static str;

    /// Fallible fetch; callers outside of tests should prefer
    /// [`SourceAdapter::fetch`].
    async fn try_fetch(&self, client: &HttpClient) -> Result<Vec<PublicationDraft>, SourceError>;

    /// Fetch that never propagates errors: any transport or parse failure
    /// is logged and surfaces as an empty batch, so the remaining sources
    /// and the final merge still run.
    async fn fetch(&self, client: &HttpClient) -> Vec<PublicationDraft> {
        match self.try_fetch(client).await {
            Ok(drafts) => {
                info!(source = self.id(), count = drafts.len(), "fetched drafts");
                drafts
            }
            Err(e) => {
                warn!(source = self.id(), error = %e, "source unavailable; continuing without it");
                Vec::new()
            }
        }
    }
}

/// JSON fields some sources send as a number and others as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum NumericField {
    Number(i64),
    Text(String),
}

impl NumericField {
    pub(crate) fn into_string(self) -> String {
        match self {
            NumericField::Number(n) => n.to_string(),
            NumericField::Text(t) => t.trim().to_string(),
        }
    }
}
