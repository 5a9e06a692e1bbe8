//! Service context - dependency container for services
//!
//! Holds the repositories and the shared synchronization state. Clones share
//! the same lock and RNG through `Arc`, so one context per process keeps the
//! "at most one reconciliation at a time" guarantee.

use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use lunchbot_core::traits::{CatalogRepository, RecommendLogRepository};

use super::recommend::daily_seed;

/// Service context containing all shared dependencies
#[derive(Clone)]
pub struct ServiceContext {
    catalog_repo: Arc<dyn CatalogRepository>,
    recommend_log: Arc<dyn RecommendLogRepository>,
    /// Guards every catalog read-modify-write cycle
    catalog_lock: Arc<Mutex<()>>,
    /// Seeded once from today's date, then advances across picks
    rng: Arc<Mutex<StdRng>>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        catalog_repo: Arc<dyn CatalogRepository>,
        recommend_log: Arc<dyn RecommendLogRepository>,
    ) -> Self {
        Self {
            catalog_repo,
            recommend_log,
            catalog_lock: Arc::new(Mutex::new(())),
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(daily_seed(Utc::now())))),
        }
    }

    /// Get the catalog repository
    pub fn catalog_repo(&self) -> &dyn CatalogRepository {
        self.catalog_repo.as_ref()
    }

    /// Get the recommendation log repository
    pub fn recommend_log(&self) -> &dyn RecommendLogRepository {
        self.recommend_log.as_ref()
    }

    /// Get the process-wide catalog exclusion lock
    pub fn catalog_lock(&self) -> &Mutex<()> {
        &self.catalog_lock
    }

    /// Get the shared recommendation RNG
    pub fn rng(&self) -> &Mutex<StdRng> {
        &self.rng
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("catalog_repo", &"dyn CatalogRepository")
            .field("recommend_log", &"dyn RecommendLogRepository")
            .finish()
    }
}
