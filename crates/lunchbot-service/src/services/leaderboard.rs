//! Leaderboard projector - read-side query over the catalog

use tracing::instrument;

use lunchbot_core::StoreRecord;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Top-k stores by recommend count, descending.
///
/// The sort is stable, so ties keep their catalog order. Pure function; the
/// input catalog is untouched.
pub fn top_k(catalog: &[StoreRecord], k: usize) -> Vec<StoreRecord> {
    let mut ranked = catalog.to_vec();
    ranked.sort_by(|a, b| b.recommend_count.cmp(&a.recommend_count));
    ranked.truncate(k);
    ranked
}

/// Leaderboard service
pub struct LeaderboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LeaderboardService<'a> {
    /// Create a new LeaderboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the catalog and project the current leaderboard.
    ///
    /// Takes no lock: catalog saves are atomic renames, so a read only ever
    /// sees a complete catalog, at worst the one from just before an
    /// in-flight reconciliation.
    #[instrument(skip(self))]
    pub async fn top_stores(&self, k: usize) -> ServiceResult<Vec<StoreRecord>> {
        let catalog = self.ctx.catalog_repo().load().await?;
        Ok(top_k(&catalog, k))
    }
}
