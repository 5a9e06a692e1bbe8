//! Message view trait - read-only capability over a chat message
//!
//! Implemented by the chat integration layer. The core only ever reads
//! through this trait: embed metadata to recognize recommendation messages,
//! and the live reaction state to recompute counts.

use async_trait::async_trait;

use crate::entities::{ReactionAggregate, Reactor};
use super::RepoResult;

#[async_trait]
pub trait MessageView: Send + Sync {
    /// Title of the message's first embed, if any
    fn embed_title(&self) -> Option<&str>;

    /// Footer text of the message's first embed, if any
    fn embed_footer(&self) -> Option<&str>;

    /// Current reaction aggregates on the message.
    ///
    /// A deleted message or a transient fetch failure surfaces as
    /// `DomainError::ReactionFetchFailed`, never as an empty list.
    async fn reaction_aggregates(&self) -> RepoResult<Vec<ReactionAggregate>>;

    /// Users currently reacting with the given emoji
    async fn reactors(&self, emoji: &str) -> RepoResult<Vec<Reactor>>;
}
