//! Recommendation reconciler
//!
//! Recomputes a store's recommend count from the live reaction state and
//! persists it. Every reconciliation is a full read-modify-write of the
//! catalog executed under the context's process-wide lock, so concurrent
//! reaction events can never interleave partial catalog states.

use tracing::{info, instrument, warn};

use lunchbot_core::traits::MessageView;
use lunchbot_core::{Reactor, RecommendationTag, RECOMMEND_EMOJI};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::snapshot::resolve_recommend_count;

/// Reconcile service
pub struct ReconcileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReconcileService<'a> {
    /// Create a new ReconcileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Entry point for reaction add/remove events from the chat layer.
    ///
    /// Drops events from bot accounts (the bot seeds its own messages with
    /// placeholder reactions), events for anything but the tracked positive
    /// emoji, and messages that do not carry the recommendation footer
    /// sentinel. Everything else reconciles the store named in the embed
    /// title.
    #[instrument(skip(self, message, actor), fields(actor = %actor.username))]
    pub async fn handle_reaction_event(
        &self,
        message: &dyn MessageView,
        emoji: &str,
        actor: &Reactor,
    ) -> ServiceResult<Option<u32>> {
        if actor.is_bot {
            return Ok(None);
        }
        if emoji != RECOMMEND_EMOJI {
            return Ok(None);
        }
        let Some(tag) =
            RecommendationTag::from_embed(message.embed_title(), message.embed_footer())
        else {
            return Ok(None);
        };

        self.reconcile(&tag.store_name, message, emoji).await
    }

    /// Recompute and persist one store's recommend count.
    ///
    /// Returns the stored count, or `None` when the store is not in the
    /// catalog (a stale message for a store that was since removed; the
    /// event is dropped, not an error).
    #[instrument(skip(self, message))]
    pub async fn reconcile(
        &self,
        store_name: &str,
        message: &dyn MessageView,
        emoji: &str,
    ) -> ServiceResult<Option<u32>> {
        // Resolve before entering the critical section; a slow or failing
        // fetch must not block other reconciliations.
        let count = resolve_recommend_count(message, emoji).await?;

        let _guard = self.ctx.catalog_lock().lock().await;

        let mut catalog = self.ctx.catalog_repo().load().await?;
        let Some(record) = catalog.iter_mut().find(|r| r.store_name == store_name) else {
            warn!(store_name, "store not in catalog, reaction event dropped");
            return Ok(None);
        };
        record.recommend_count = count;
        self.ctx.catalog_repo().save(&catalog).await?;

        info!(store_name, count, "recommend count synchronized");
        Ok(Some(count))
    }

    /// Zero every store's recommend count, under the same exclusion lock
    #[instrument(skip(self))]
    pub async fn reset_counts(&self) -> ServiceResult<()> {
        let _guard = self.ctx.catalog_lock().lock().await;

        let mut catalog = self.ctx.catalog_repo().load().await?;
        for record in &mut catalog {
            record.recommend_count = 0;
        }
        self.ctx.catalog_repo().save(&catalog).await?;

        info!(records = catalog.len(), "recommend counts reset");
        Ok(())
    }
}
