//! Web of Science source adapter
//!
//! WoS Starter API over the author's publication set. Hits from the core
//! collection are classified as `sci`. Requires an API key.

use super::traits::{NumericField, SourceAdapter, SourceError};
use crate::config::UpdaterConfig;
use crate::http::HttpClient;
use crate::identity;
use async_trait::async_trait;
use bibsync_domain::{PublicationDraft, SourceIndex};
use serde::Deserialize;

const DOCUMENTS_URL: &str = "https://api.clarivate.com/apis/wos-starter/v1/documents";

#[derive(Debug, Deserialize)]
struct WosResponse {
    #[serde(default)]
    hits: Vec<WosHit>,
}

#[derive(Debug, Deserialize)]
struct WosHit {
    uid: Option<String>,
    title: Option<String>,
    names: Option<WosNames>,
    source: Option<WosSourceInfo>,
    identifiers: Option<WosIdentifiers>,
    #[serde(default)]
    citations: Vec<WosCitation>,
}

#[derive(Debug, Deserialize)]
struct WosNames {
    #[serde(default)]
    authors: Vec<WosAuthor>,
}

#[derive(Debug, Deserialize)]
struct WosAuthor {
    #[serde(rename = "displayName")]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WosSourceInfo {
    #[serde(rename = "sourceTitle")]
    source_title: Option<String>,
    #[serde(rename = "publishYear")]
    publish_year: Option<NumericField>,
}

#[derive(Debug, Deserialize)]
struct WosIdentifiers {
    doi: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WosCitation {
    count: Option<i64>,
}

pub struct WosSource {
    api_key: Option<String>,
    researcher_id: Option<String>,
}

impl WosSource {
    pub fn new(config: &UpdaterConfig) -> Self {
        Self {
            api_key: config.wos_api_key.clone(),
            researcher_id: config.wos_researcher_id.clone(),
        }
    }

    /// Parse a WoS Starter documents response into drafts.
    pub fn parse_documents_response(json: &str) -> Result<Vec<PublicationDraft>, SourceError> {
        let response: WosResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("invalid WoS JSON: {}", e)))?;

        Ok(response.hits.into_iter().map(parse_hit).collect())
    }
}

fn parse_hit(hit: WosHit) -> PublicationDraft {
    let author = hit
        .names
        .map(|names| {
            names
                .authors
                .into_iter()
                .filter_map(|a| a.display_name)
                .collect::<Vec<_>>()
                .join("; ")
        })
        .unwrap_or_default();

    let (journal, year) = match hit.source {
        Some(source) => (
            source.source_title.filter(|j| !j.trim().is_empty()),
            source
                .publish_year
                .map(NumericField::into_string)
                .unwrap_or_default(),
        ),
        None => (None, String::new()),
    };

    let citations = hit
        .citations
        .iter()
        .filter_map(|c| c.count)
        .max()
        .map(|count| count.to_string());

    let wos_link = hit
        .uid
        .filter(|uid| !uid.is_empty())
        .map(|uid| format!("https://www.webofscience.com/wos/woscc/full-record/{}", uid));

    PublicationDraft {
        title: hit.title.unwrap_or_default(),
        author,
        year,
        index: SourceIndex::Sci,
        doi: hit
            .identifiers
            .and_then(|ids| ids.doi)
            .map(|d| d.trim().to_string())
            .filter(|d| identity::is_valid_doi(d)),
        journal,
        wos_link,
        citations,
        ..Default::default()
    }
}

#[async_trait]
impl SourceAdapter for WosSource {
    fn id(&self) -> &'static str {
        "wos"
    }

    async fn try_fetch(&self, client: &HttpClient) -> Result<Vec<PublicationDraft>, SourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SourceError::MissingCredentials("WOS_API_KEY"))?;
        let researcher_id = self
            .researcher_id
            .as_deref()
            .ok_or(SourceError::MissingCredentials("WOS_RESEARCHER_ID"))?;

        let query = format!("AI=({})", researcher_id);
        let response = client
            .get_with_headers(
                DOCUMENTS_URL,
                &[("db", "WOS"), ("q", query.as_str())],
                &[("X-ApiKey", api_key)],
            )
            .await?;
        if response.status != 200 {
            return Err(SourceError::Status(response.status));
        }

        Self::parse_documents_response(&response.body)
    }
}
