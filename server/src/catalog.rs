//! Startup sanity check of the static catalog document.
//!
//! The catalog is served as a plain static file and never parsed by the server
//! at request time. At startup it is decoded once with the client's own parser
//! so that data problems show up in the server log before a browser sees them.
//! Problems are warnings only: the client tolerates an empty or partial catalog.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use client::net::catalog::{CatalogError, parse_catalog};

/// Valid rating range, in stars.
pub const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=5.0;

#[derive(Debug, thiserror::Error)]
pub enum CatalogCheckError {
    #[error("catalog file {path} unreadable: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] CatalogError),
}

/// What the startup check found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogReport {
    pub records: usize,
    /// Identifiers seen more than once, in first-repeat order.
    pub duplicate_ids: Vec<u64>,
    /// Identifiers whose rating lies outside 0-5.
    pub out_of_range_ratings: Vec<u64>,
}

impl CatalogReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty() && self.out_of_range_ratings.is_empty()
    }
}

/// Inspect a catalog document body.
///
/// # Errors
///
/// Returns `CatalogCheckError::Parse` when the body is not a catalog array.
pub fn inspect(body: &str) -> Result<CatalogReport, CatalogCheckError> {
    let items = parse_catalog(body)?;
    let mut seen = HashSet::new();
    let mut report = CatalogReport { records: items.len(), ..CatalogReport::default() };
    for item in &items {
        if !seen.insert(item.toy_id) && !report.duplicate_ids.contains(&item.toy_id) {
            report.duplicate_ids.push(item.toy_id);
        }
        if !RATING_RANGE.contains(&item.rating) {
            report.out_of_range_ratings.push(item.toy_id);
        }
    }
    Ok(report)
}

/// Read and inspect the catalog file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub async fn check_file(path: &Path) -> Result<CatalogReport, CatalogCheckError> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogCheckError::Read { path: path.to_path_buf(), source })?;
    inspect(&body)
}

/// Run the startup check and log its findings. Never fails.
pub async fn log_startup_check(path: &Path) {
    match check_file(path).await {
        Ok(report) => {
            tracing::info!(path = %path.display(), records = report.records, "catalog loaded");
            if report.is_clean() {
                return;
            }
            if !report.duplicate_ids.is_empty() {
                tracing::warn!(ids = ?report.duplicate_ids, "catalog has duplicate toyId values; first match wins");
            }
            if !report.out_of_range_ratings.is_empty() {
                tracing::warn!(ids = ?report.out_of_range_ratings, "catalog has ratings outside 0-5");
            }
        }
        Err(e) => tracing::warn!(error = %e, "catalog check failed; clients will see an empty catalog"),
    }
}
