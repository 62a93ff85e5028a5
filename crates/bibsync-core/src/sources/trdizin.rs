//! TR Dizin source adapter
//!
//! Public author-publications endpoint of the Turkish national index; no
//! API key required.

use super::traits::{NumericField, SourceAdapter, SourceError};
use crate::config::UpdaterConfig;
use crate::http::HttpClient;
use crate::identity;
use async_trait::async_trait;
use bibsync_domain::{PublicationDraft, SourceIndex};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TrdizinResponse {
    #[serde(default)]
    data: Vec<TrdizinEntry>,
}

#[derive(Debug, Deserialize)]
struct TrdizinEntry {
    id: Option<NumericField>,
    title: Option<String>,
    authors: Option<String>,
    // year arrives as a number in some responses, a string in others
    year: Option<NumericField>,
    doi: Option<String>,
    journal: Option<String>,
}

pub struct TrdizinSource {
    author_id: String,
}

impl TrdizinSource {
    pub fn new(config: &UpdaterConfig) -> Self {
        Self {
            author_id: config.trdizin_author_id.clone(),
        }
    }

    /// Parse a TR Dizin author-publications response into drafts.
    pub fn parse_publications_response(
        json: &str,
    ) -> Result<Vec<PublicationDraft>, SourceError> {
        let response: TrdizinResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("invalid TR Dizin JSON: {}", e)))?;

        Ok(response.data.into_iter().map(parse_entry).collect())
    }
}

fn parse_entry(entry: TrdizinEntry) -> PublicationDraft {
    let trdizin_link = entry
        .id
        .map(NumericField::into_string)
        .filter(|id| !id.is_empty())
        .map(|id| format!("https://search.trdizin.gov.tr/en/yayin/detay/{}", id));

    PublicationDraft {
        title: entry.title.unwrap_or_default(),
        author: entry.authors.unwrap_or_default(),
        year: entry.year.map(NumericField::into_string).unwrap_or_default(),
        index: SourceIndex::Trdizin,
        doi: entry
            .doi
            .map(|d| d.trim().to_string())
            .filter(|d| identity::is_valid_doi(d)),
        journal: entry.journal.filter(|j| !j.trim().is_empty()),
        trdizin_link,
        ..Default::default()
    }
}

#[async_trait]
impl SourceAdapter for TrdizinSource {
    fn id(&self) -> &'static str {
        "trdizin"
    }

    async fn try_fetch(&self, client: &HttpClient) -> Result<Vec<PublicationDraft>, SourceError> {
        let url = format!(
            "https://search.trdizin.gov.tr/api/author/{}/publications",
            self.author_id
        );
        let response = client.get(&url).await?;
        if response.status != 200 {
            return Err(SourceError::Status(response.status));
        }

        Self::parse_publications_response(&response.body)
    }
}
