//! Repository traits (ports) - define the interface for persistence
//!
//! The domain layer defines what it needs; the storage layer provides the
//! implementation. The catalog is deliberately whole-file: it is loaded in
//! full and rewritten in full on every mutation, which keeps the storage
//! format trivial at catalog sizes of tens to low hundreds of records.

use async_trait::async_trait;

use crate::entities::{RecommendLogEntry, StoreRecord};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Whole-file store catalog.
///
/// Provides no internal locking; callers that mutate must serialize their
/// load/save cycles themselves.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load the full catalog in backing-store order
    async fn load(&self) -> RepoResult<Vec<StoreRecord>>;

    /// Overwrite the full catalog
    async fn save(&self, catalog: &[StoreRecord]) -> RepoResult<()>;
}

/// Append-only recommendation log
#[async_trait]
pub trait RecommendLogRepository: Send + Sync {
    /// Append one served-recommendation record
    async fn append(&self, entry: &RecommendLogEntry) -> RepoResult<()>;
}
