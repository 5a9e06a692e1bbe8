//! JSON flat-file implementation of CatalogRepository

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument};

use lunchbot_core::traits::{CatalogRepository, RepoResult};
use lunchbot_core::{DomainError, StoreRecord};

/// Whole-file JSON catalog store.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write can never leave a half-written catalog behind and readers
/// never observe a torn file.
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogStore {
    #[instrument(skip(self))]
    async fn load(&self) -> RepoResult<Vec<StoreRecord>> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::CatalogUnavailable(format!("{}: {e}", self.path.display()))
        })?;

        let catalog: Vec<StoreRecord> =
            serde_json::from_str(&raw).map_err(|e| DomainError::CorruptCatalog(e.to_string()))?;

        debug!(records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    #[instrument(skip(self, catalog))]
    async fn save(&self, catalog: &[StoreRecord]) -> RepoResult<()> {
        let body = serde_json::to_string_pretty(catalog)
            .map_err(|e| DomainError::PersistenceWriteFailed(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, body.as_bytes()).await.map_err(|e| {
            DomainError::PersistenceWriteFailed(format!("{}: {e}", temp.display()))
        })?;
        fs::rename(&temp, &self.path).await.map_err(|e| {
            DomainError::PersistenceWriteFailed(format!("{}: {e}", self.path.display()))
        })?;

        debug!(records = catalog.len(), "catalog saved");
        Ok(())
    }
}
