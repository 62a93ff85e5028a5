//! Ranked classification tiers for bibliographic indices

use serde::{Deserialize, Serialize};

/// Which bibliographic index a publication is counted under.
///
/// Tiers form a total order by authority: `sci > scopus > trdizin > other`.
/// Reconciliation only ever promotes a record toward a stricter tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceIndex {
    /// Science Citation Index (Web of Science core collection)
    Sci,
    /// Scopus-indexed
    Scopus,
    /// TR Dizin (Turkish national index)
    Trdizin,
    /// Unclassified or unknown legacy value
    #[default]
    #[serde(other)]
    Other,
}

impl SourceIndex {
    /// Authority rank; a higher rank is a stricter classification.
    pub fn rank(&self) -> u8 {
        match self {
            SourceIndex::Sci => 3,
            SourceIndex::Scopus => 2,
            SourceIndex::Trdizin => 1,
            SourceIndex::Other => 0,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceIndex::Sci => "sci",
            SourceIndex::Scopus => "scopus",
            SourceIndex::Trdizin => "trdizin",
            SourceIndex::Other => "other",
        }
    }
}
