//! Traits (ports) implemented outside the domain layer

mod message;
mod repositories;

pub use message::MessageView;
pub use repositories::{CatalogRepository, RecommendLogRepository, RepoResult};
