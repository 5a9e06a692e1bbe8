//! Recommendation log entry - one line in the append-only JSONL log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StoreRecord;

/// One served recommendation, recorded for offline analysis.
///
/// Write-only from the core's perspective; nothing ever reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendLogEntry {
    pub user_id: u64,
    pub username: String,
    pub store_name: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

impl RecommendLogEntry {
    /// Create an entry for a recommendation served now
    pub fn new(user_id: u64, username: impl Into<String>, store: &StoreRecord) -> Self {
        Self {
            user_id,
            username: username.into(),
            store_name: store.store_name.clone(),
            category: store.category.clone(),
            timestamp: Utc::now(),
        }
    }
}
