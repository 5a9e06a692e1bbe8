//! Domain errors - error types shared by the persistence and service layers

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Backing catalog file exists but does not parse into store records
    #[error("Catalog is corrupt: {0}")]
    CorruptCatalog(String),

    /// Backing catalog file could not be read at all
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Store name absent from the catalog
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// Reactions or reacting users could not be fetched from the chat layer
    #[error("Failed to fetch reactions: {0}")]
    ReactionFetchFailed(String),

    /// Catalog write failed; the on-disk count may be stale
    #[error("Failed to persist catalog: {0}")]
    PersistenceWriteFailed(String),

    /// Append to the recommendation log failed
    #[error("Failed to append recommendation log: {0}")]
    LogWriteFailed(String),

    /// Anything else
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get a stable error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::CorruptCatalog(_) => "CORRUPT_CATALOG",
            Self::CatalogUnavailable(_) => "CATALOG_UNAVAILABLE",
            Self::StoreNotFound(_) => "UNKNOWN_STORE",
            Self::ReactionFetchFailed(_) => "REACTION_FETCH_FAILED",
            Self::PersistenceWriteFailed(_) => "PERSISTENCE_WRITE_FAILED",
            Self::LogWriteFailed(_) => "LOG_WRITE_FAILED",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StoreNotFound(_))
    }

    /// Check if this failure is transient and the event can simply be dropped
    /// (the next reaction event recomputes the count from scratch anyway)
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ReactionFetchFailed(_) | Self::CatalogUnavailable(_)
        )
    }
}
