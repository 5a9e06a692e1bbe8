//! Recommendation picker
//!
//! Serves a random store, optionally filtered by category keywords, and
//! records every served recommendation in the append-only log. The RNG is
//! seeded from today's date (KST) when the context is created, so a restart
//! on the same day replays the same pick sequence.

use chrono::{DateTime, Datelike, Duration, Utc};
use rand::seq::SliceRandom;
use tracing::{info, instrument};

use lunchbot_core::{RecommendLogEntry, StoreRecord};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Hours ahead of UTC for Korea Standard Time
const KST_UTC_OFFSET_HOURS: i64 = 9;

/// RNG seed for the given instant: the date in KST as YYYYMMDD
pub(crate) fn daily_seed(now: DateTime<Utc>) -> u64 {
    let date = (now + Duration::hours(KST_UTC_OFFSET_HOURS)).date_naive();
    let year = u64::try_from(date.year()).unwrap_or(0);
    year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

/// Recommendation service
pub struct RecommendService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecommendService<'a> {
    /// Create a new RecommendService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Pick a store for the given user and append it to the recommendation
    /// log. Returns `None` when no store matches the category filter.
    #[instrument(skip(self))]
    pub async fn recommend(
        &self,
        user_id: u64,
        username: &str,
        category: Option<&str>,
    ) -> ServiceResult<Option<StoreRecord>> {
        let Some(store) = self.pick(category).await? else {
            return Ok(None);
        };

        let entry = RecommendLogEntry::new(user_id, username, &store);
        self.ctx.recommend_log().append(&entry).await?;

        info!(
            store_name = %store.store_name,
            category = %store.category,
            username,
            "recommendation served"
        );
        Ok(Some(store))
    }

    /// Pick a random store. `category` is split on whitespace into keywords;
    /// a store qualifies when any keyword appears in its category tag. No
    /// filter means the whole catalog qualifies.
    #[instrument(skip(self))]
    pub async fn pick(&self, category: Option<&str>) -> ServiceResult<Option<StoreRecord>> {
        let catalog = self.ctx.catalog_repo().load().await?;

        let keywords: Vec<&str> = category
            .map(|raw| raw.split_whitespace().collect())
            .unwrap_or_default();
        let candidates: Vec<&StoreRecord> = if keywords.is_empty() {
            catalog.iter().collect()
        } else {
            catalog
                .iter()
                .filter(|r| r.matches_category(&keywords))
                .collect()
        };

        if candidates.is_empty() {
            return Ok(None);
        }

        let mut rng = self.ctx.rng().lock().await;
        Ok(candidates.choose(&mut *rng).map(|r| (*r).clone()))
    }
}
