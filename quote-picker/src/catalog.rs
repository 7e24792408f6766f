//! Catalog file loading.
//!
//! A catalog is a JSON array of objects, one per quotable test. Every entry
//! must carry the configured code and label fields as text; the typeahead
//! relies on that and does not check it again.

use std::path::{Path, PathBuf};

use thiserror::Error;
use typeahead::{FieldSelectors, Record, TypeaheadError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog entry: {0}")]
    Invalid(#[from] TypeaheadError),
}

/// Parse catalog JSON and check every entry against the field selectors
pub fn parse_catalog(
    contents: &str,
    selectors: FieldSelectors<'_>,
) -> Result<Vec<Record>, CatalogError> {
    let records: Vec<Record> = serde_json::from_str(contents)?;
    selectors.check(&records)?;
    Ok(records)
}

pub async fn read_catalog(
    path: &Path,
    selectors: FieldSelectors<'_>,
) -> Result<Vec<Record>, CatalogError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_catalog(&contents, selectors)
}
