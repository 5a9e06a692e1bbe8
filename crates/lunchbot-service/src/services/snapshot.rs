//! Reaction snapshot resolver
//!
//! Computes the authoritative recommend count for a message from its live
//! reaction state. The count is always derived from scratch; nothing here
//! increments or decrements.

use tracing::instrument;

use lunchbot_core::traits::MessageView;

use super::error::ServiceResult;

/// Resolve the current non-bot reactor count for `emoji` on a message.
///
/// Scans the reaction aggregates; if none matches the emoji the count is 0
/// (every reaction was removed, or the message never had one). Fetch
/// failures from the chat layer propagate as errors rather than a silent
/// zero.
#[instrument(skip(message))]
pub async fn resolve_recommend_count(
    message: &dyn MessageView,
    emoji: &str,
) -> ServiceResult<u32> {
    let aggregates = message.reaction_aggregates().await?;
    if !aggregates.iter().any(|a| a.is_emoji(emoji)) {
        return Ok(0);
    }

    let reactors = message.reactors(emoji).await?;
    let count = reactors.iter().filter(|r| !r.is_bot).count();
    Ok(count as u32)
}
