//! Publication record types

use super::SourceIndex;
use serde::{Deserialize, Serialize};

/// Normalized output of a source adapter, not yet reconciled.
///
/// At least one of `doi`/`title` must be non-empty for the draft to be
/// keyable; un-keyed drafts are discarded by the reconciler.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// 4-digit publication year, or empty when the source omits it
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub index: SourceIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopus_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trdizin_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wos_link: Option<String>,
    /// Citation count as decimal text; time-varying, newest fetch wins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<String>,
}

/// A persisted publication in the catalog, addressed by canonical key.
///
/// Same shape as [`PublicationDraft`]; absent optional fields are omitted
/// from the serialized catalog rather than written as null.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub index: SourceIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopus_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trdizin_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wos_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<String>,
}

impl From<PublicationDraft> for CatalogRecord {
    /// A draft with a novel canonical key enters the catalog verbatim.
    fn from(draft: PublicationDraft) -> Self {
        Self {
            title: draft.title,
            author: draft.author,
            year: draft.year,
            index: draft.index,
            doi: draft.doi,
            journal: draft.journal,
            scopus_link: draft.scopus_link,
            trdizin_link: draft.trdizin_link,
            wos_link: draft.wos_link,
            citations: draft.citations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let record = CatalogRecord {
            title: "Paper A".to_string(),
            year: "2022".to_string(),
            index: SourceIndex::Scopus,
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("doi"));
        assert!(!json.contains("journal"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_loads_record_with_missing_fields() {
        let record: CatalogRecord =
            serde_json::from_str(r#"{"title": "Paper A", "doi": "10.1/a"}"#).unwrap();
        assert_eq!(record.title, "Paper A");
        assert_eq!(record.doi.as_deref(), Some("10.1/a"));
        assert_eq!(record.index, SourceIndex::Other);
        assert!(record.year.is_empty());
    }

    #[test]
    fn test_draft_enters_verbatim() {
        let draft = PublicationDraft {
            title: "Paper A".to_string(),
            doi: Some("10.1/a".to_string()),
            wos_link: Some("L2".to_string()),
            index: SourceIndex::Sci,
            ..Default::default()
        };
        let record = CatalogRecord::from(draft.clone());
        assert_eq!(record.title, draft.title);
        assert_eq!(record.wos_link, draft.wos_link);
        assert_eq!(record.index, SourceIndex::Sci);
    }
}
