//! Availability store: sole owner of the persisted availability document.
//!
//! The store exposes exactly two operations: `read` and `replace`. Every
//! replace overwrites the whole record; there are no partial updates and no
//! concurrency token, so the last completed write wins. Writes go through a
//! tmp file in the same directory followed by a rename, so a reader never
//! observes a torn record and a failed write leaves the prior record
//! effective.
//!
//! No state is cached between calls; every read hits the file system.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use menuboard_core::{AvailabilityRecord, ItemId};
use thiserror::Error;

/// Availability document persistence failures.
///
/// A missing document is NOT an error; `read` resolves it to the empty
/// default record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read availability record at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("corrupt availability record at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write availability record at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// File-backed store for the availability record.
#[derive(Debug, Clone)]
pub struct AvailabilityStore {
    path: PathBuf,
}

impl AvailabilityStore {
    /// Create a store backed by the given document path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record.
    ///
    /// A document that does not exist yet resolves to the empty default
    /// record stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` on I/O failure and `StoreError::Corrupt`
    /// if the document exists but cannot be parsed.
    pub async fn read(&self) -> Result<AvailabilityRecord, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(AvailabilityRecord::empty(Utc::now()));
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the entire record with the given id set.
    ///
    /// Unknown ids are preserved verbatim; the catalog is not consulted.
    /// Every successful replace stamps `last_updated` with the current time,
    /// even when the id set is unchanged - the timestamp is the system's only
    /// freshness signal.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the record could not be persisted. On
    /// failure the previously persisted record remains effective.
    pub async fn replace(&self, ids: Vec<ItemId>) -> Result<DateTime<Utc>, StoreError> {
        let record = AvailabilityRecord {
            available_items: ids,
            last_updated: Utc::now(),
        };

        // serde_json only fails on non-string keys or a failing Serialize
        // impl, neither of which this record can produce.
        let body = serde_json::to_vec_pretty(&record).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: std::io::Error::other(e),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| StoreError::Write {
                        path: self.path.clone(),
                        source,
                    })?;
            }
        }

        // Atomic replace: tmp file + rename.
        let tmp_path = self.path.with_extension("json.tmp");
        if let Err(source) = tokio::fs::write(&tmp_path, &body).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }
        if let Err(source) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }

        Ok(record.last_updated)
    }
}
