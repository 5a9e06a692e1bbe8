//! Domain entities

mod embed;
mod reaction;
mod recommend_log;
mod store;

pub use embed::{recommend_footer, RecommendationTag, RECOMMEND_FOOTER_SENTINEL};
pub use reaction::{ReactionAggregate, Reactor, NOT_RECOMMEND_EMOJI, RECOMMEND_EMOJI};
pub use recommend_log::RecommendLogEntry;
pub use store::StoreRecord;
