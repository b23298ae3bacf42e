//! Catalog source: loads the read-only menu document.
//!
//! The document is re-read on every call. There is no in-process cache, so
//! an edited `menu.json` is visible on the next request without a restart.

use std::path::{Path, PathBuf};

use menuboard_core::Catalog;
use thiserror::Error;

/// The external menu source could not be loaded or parsed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse catalog at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads the menu catalog document from disk.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    path: PathBuf,
}

impl CatalogSource {
    /// Create a source backed by the given document path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse the catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Read` if the file cannot be read and
    /// `CatalogError::Parse` if its contents are not a valid catalog.
    pub async fn load(&self) -> Result<Catalog, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Read {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_parses_catalog_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        tokio::fs::write(
            &path,
            r#"{"categories":[{"name":"Drinks","items":[{"id":"tea-01","name":"Tea","price":2.5}]}]}"#,
        )
        .await
        .unwrap();

        let catalog = CatalogSource::new(&path).load().await.unwrap();
        assert_eq!(catalog.categories[0].items[0].name, "Tea");
    }

    #[tokio::test]
    async fn test_missing_document_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogSource::new(dir.path().join("missing.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[tokio::test]
    async fn test_malformed_document_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let err = CatalogSource::new(&path).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
