//! Scopus source adapter
//!
//! Elsevier Scopus Search API, COMPLETE view over the author's AU-ID.
//! Requires an API key; without one the adapter reports missing
//! credentials and contributes nothing.

use super::traits::{SourceAdapter, SourceError};
use crate::config::UpdaterConfig;
use crate::http::HttpClient;
use crate::identity;
use async_trait::async_trait;
use bibsync_domain::{PublicationDraft, SourceIndex};
use serde::Deserialize;

const SEARCH_URL: &str = "https://api.elsevier.com/content/search/scopus";

#[derive(Debug, Deserialize)]
struct ScopusResponse {
    #[serde(rename = "search-results")]
    search_results: ScopusSearchResults,
}

#[derive(Debug, Deserialize)]
struct ScopusSearchResults {
    #[serde(default)]
    entry: Vec<ScopusEntry>,
}

#[derive(Debug, Deserialize)]
struct ScopusEntry {
    #[serde(rename = "dc:title")]
    title: Option<String>,
    #[serde(rename = "dc:creator")]
    creator: Option<String>,
    #[serde(rename = "prism:publicationName")]
    publication_name: Option<String>,
    #[serde(rename = "prism:coverDate")]
    cover_date: Option<String>,
    #[serde(rename = "prism:doi")]
    doi: Option<String>,
    #[serde(rename = "citedby-count")]
    citedby_count: Option<String>,
    eid: Option<String>,
}

pub struct ScopusSource {
    api_key: Option<String>,
    author_id: String,
}

impl ScopusSource {
    pub fn new(config: &UpdaterConfig) -> Self {
        Self {
            api_key: config.scopus_api_key.clone(),
            author_id: config.scopus_author_id.clone(),
        }
    }

    /// Parse a Scopus search response into drafts.
    pub fn parse_search_response(json: &str) -> Result<Vec<PublicationDraft>, SourceError> {
        let response: ScopusResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("invalid Scopus JSON: {}", e)))?;

        Ok(response
            .search_results
            .entry
            .into_iter()
            .map(parse_entry)
            .collect())
    }
}

fn parse_entry(entry: ScopusEntry) -> PublicationDraft {
    // coverDate is "YYYY-MM-DD"; keep the 4-digit year
    let year = entry
        .cover_date
        .as_deref()
        .and_then(|d| d.split('-').next())
        .unwrap_or_default()
        .to_string();

    let scopus_link = entry
        .eid
        .filter(|eid| !eid.is_empty())
        .map(|eid| format!("https://www.scopus.com/record/display.uri?eid={}", eid));

    PublicationDraft {
        title: entry.title.unwrap_or_default(),
        author: entry.creator.unwrap_or_default(),
        year,
        index: SourceIndex::Scopus,
        doi: entry
            .doi
            .map(|d| d.trim().to_string())
            .filter(|d| identity::is_valid_doi(d)),
        journal: entry.publication_name.filter(|j| !j.trim().is_empty()),
        scopus_link,
        citations: entry.citedby_count.filter(|c| !c.trim().is_empty()),
        ..Default::default()
    }
}

#[async_trait]
impl SourceAdapter for ScopusSource {
    fn id(&self) -> &'static str {
        "scopus"
    }

    async fn try_fetch(&self, client: &HttpClient) -> Result<Vec<PublicationDraft>, SourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SourceError::MissingCredentials("SCOPUS_API_KEY"))?;

        let query = format!("AU-ID({})", self.author_id);
        let response = client
            .get_with_params(
                SEARCH_URL,
                &[
                    ("query", query.as_str()),
                    ("apiKey", api_key),
                    ("view", "COMPLETE"),
                ],
            )
            .await?;
        if response.status != 200 {
            return Err(SourceError::Status(response.status));
        }

        Self::parse_search_response(&response.body)
    }
}
