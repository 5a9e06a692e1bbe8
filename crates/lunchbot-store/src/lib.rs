//! # lunchbot-store
//!
//! Persistence layer implementing the repository traits from `lunchbot-core`
//! over plain files:
//!
//! - `JsonCatalogStore`: the store catalog as one JSON array, read in full
//!   and rewritten in full on every mutation
//! - `JsonlRecommendLog`: the append-only recommendation log, one JSON
//!   object per line
//!
//! Neither store locks internally; the service layer serializes mutating
//! access through its own exclusion lock.

pub mod catalog;
pub mod log;

// Re-export commonly used types
pub use catalog::JsonCatalogStore;
pub use log::JsonlRecommendLog;
