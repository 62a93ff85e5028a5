//! Run configuration for the updater
//!
//! Credentials, author ids, and the catalog path are carried in an explicit
//! value threaded into the adapters and the store, so the engine is testable
//! without any environment setup.

use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct UpdaterConfig {
    pub scopus_api_key: Option<String>,
    pub scopus_author_id: String,
    pub trdizin_author_id: String,
    pub wos_api_key: Option<String>,
    pub wos_researcher_id: Option<String>,
    pub catalog_path: PathBuf,
}

impl UpdaterConfig {
    /// Read configuration from the environment, with the catalog path
    /// defaulting to `publications.json` in the working directory.
    pub fn from_env() -> Self {
        Self {
            scopus_api_key: non_empty_var("SCOPUS_API_KEY"),
            scopus_author_id: std::env::var("SCOPUS_AUTHOR_ID")
                .unwrap_or_else(|_| "57039193000".to_string()),
            trdizin_author_id: std::env::var("TRDIZIN_AUTHOR_ID")
                .unwrap_or_else(|_| "341496".to_string()),
            wos_api_key: non_empty_var("WOS_API_KEY"),
            wos_researcher_id: non_empty_var("WOS_RESEARCHER_ID"),
            catalog_path: std::env::var("BIBSYNC_CATALOG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("publications.json")),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
