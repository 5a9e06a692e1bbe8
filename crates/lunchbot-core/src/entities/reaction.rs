//! Reaction entities - what the chat layer reports about a message's reactions

/// Emoji the bot seeds on every recommendation message and tracks for counts
pub const RECOMMEND_EMOJI: &str = "👍";

/// Downvote emoji, seeded for symmetry but never counted
pub const NOT_RECOMMEND_EMOJI: &str = "👎";

/// One user currently reacting on a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reactor {
    pub user_id: u64,
    pub username: String,
    pub is_bot: bool,
}

impl Reactor {
    /// Create a new Reactor
    pub fn new(user_id: u64, username: impl Into<String>, is_bot: bool) -> Self {
        Self {
            user_id,
            username: username.into(),
            is_bot,
        }
    }
}

/// Aggregate of one emoji on a message, as reported by the chat layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionAggregate {
    pub emoji: String,
    pub count: u32,
}

impl ReactionAggregate {
    /// Create a new ReactionAggregate
    pub fn new(emoji: impl Into<String>, count: u32) -> Self {
        Self {
            emoji: emoji.into(),
            count,
        }
    }

    /// Check if this aggregate is for a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }
}
