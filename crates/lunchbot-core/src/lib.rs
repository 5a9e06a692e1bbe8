//! # lunchbot-core
//!
//! Domain layer containing entities, domain errors, and the traits that the
//! persistence and chat integration layers implement. This crate has zero
//! dependencies on infrastructure (files, chat protocol, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    recommend_footer, ReactionAggregate, Reactor, RecommendLogEntry, RecommendationTag,
    StoreRecord, NOT_RECOMMEND_EMOJI, RECOMMEND_EMOJI, RECOMMEND_FOOTER_SENTINEL,
};
pub use error::DomainError;
pub use traits::{CatalogRepository, MessageView, RecommendLogRepository, RepoResult};
