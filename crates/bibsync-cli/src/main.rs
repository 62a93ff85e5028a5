//! bibsync binary
//!
//! Pulls publication records from the configured indices and reconciles
//! them into the local JSON catalog. One source failing never blocks the
//! others; an all-empty fetch leaves the existing catalog untouched.

use std::path::PathBuf;

use bibsync_core::{
    apply_update, CatalogStore, HttpClient, ScopusSource, SourceAdapter, TrdizinSource,
    UpdateOutcome, UpdaterConfig, WosSource,
};
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "bibsync",
    about = "Update the publication catalog from Scopus, TR Dizin, and Web of Science"
)]
struct Args {
    /// Catalog JSON file (defaults to $BIBSYNC_CATALOG or publications.json)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Fetch and reconcile, but do not write the catalog
    #[arg(long)]
    dry_run: bool,

    /// Skip the Scopus source
    #[arg(long)]
    skip_scopus: bool,

    /// Skip the TR Dizin source
    #[arg(long)]
    skip_trdizin: bool,

    /// Skip the Web of Science source
    #[arg(long)]
    skip_wos: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut config = UpdaterConfig::from_env();
    if let Some(path) = args.catalog {
        config.catalog_path = path;
    }

    let store = CatalogStore::new(&config.catalog_path);
    let catalog = store.load();
    info!(
        publications = catalog.len(),
        path = %store.path().display(),
        "loaded catalog"
    );

    let mut adapters: Vec<Box<dyn SourceAdapter>> = Vec::new();
    if !args.skip_scopus {
        adapters.push(Box::new(ScopusSource::new(&config)));
    }
    if !args.skip_trdizin {
        adapters.push(Box::new(TrdizinSource::new(&config)));
    }
    if !args.skip_wos {
        adapters.push(Box::new(WosSource::new(&config)));
    }

    let client = HttpClient::default();
    let mut batches = Vec::with_capacity(adapters.len());
    for adapter in &adapters {
        batches.push(adapter.fetch(&client).await);
    }

    match apply_update(catalog, batches) {
        UpdateOutcome::Updated { catalog, incoming } => {
            if args.dry_run {
                info!(
                    incoming,
                    publications = catalog.len(),
                    "dry run; catalog not written"
                );
            } else {
                store.save(&catalog)?;
                info!(
                    incoming,
                    publications = catalog.len(),
                    path = %store.path().display(),
                    "catalog updated"
                );
            }
        }
        UpdateOutcome::SkippedEmptyFetch { .. } => {
            warn!("every source returned no records; keeping the existing catalog untouched");
        }
    }

    Ok(())
}
