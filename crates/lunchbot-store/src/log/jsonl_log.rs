//! JSONL implementation of RecommendLogRepository

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::instrument;

use lunchbot_core::traits::{RecommendLogRepository, RepoResult};
use lunchbot_core::{DomainError, RecommendLogEntry};

/// Append-only recommendation log, one JSON object per line.
///
/// The file is created on first append. Nothing in the core reads it back;
/// it exists for offline analysis.
#[derive(Debug, Clone)]
pub struct JsonlRecommendLog {
    path: PathBuf,
}

impl JsonlRecommendLog {
    /// Create a log backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecommendLogRepository for JsonlRecommendLog {
    #[instrument(skip(self, entry), fields(store_name = %entry.store_name))]
    async fn append(&self, entry: &RecommendLogEntry) -> RepoResult<()> {
        let mut line =
            serde_json::to_string(entry).map_err(|e| DomainError::LogWriteFailed(e.to_string()))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| DomainError::LogWriteFailed(format!("{}: {e}", self.path.display())))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| DomainError::LogWriteFailed(e.to_string()))?;

        Ok(())
    }
}
