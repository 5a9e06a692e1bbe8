//! Recommendation log persistence

mod jsonl_log;

pub use jsonl_log::JsonlRecommendLog;
