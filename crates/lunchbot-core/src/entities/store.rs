//! Store record entity - one restaurant in the catalog

use serde::{Deserialize, Serialize};

/// A single restaurant entry in the catalog.
///
/// `store_name` is the unique key. `recommend_count` is the only field the
/// core ever mutates; it is a cached projection of the live 👍 reactions on
/// the most recent recommendation message for this store. Everything else is
/// display data filled in by the crawler and passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub store_name: String,
    pub category: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub visited_review: String,
    #[serde(default)]
    pub blog_review: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub business_hours: String,
    /// Older crawl outputs wrote `tell_num` or `phone_num`; accept all three.
    #[serde(default, alias = "tell_num", alias = "phone_num")]
    pub phone_number: String,
    /// Pre-rename catalog files used the `recommand` spelling.
    #[serde(default, alias = "recommand")]
    pub recommend_count: u32,
}

impl StoreRecord {
    /// Create a record with empty display fields and a zero count
    pub fn new(store_name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            category: category.into(),
            rating: String::new(),
            visited_review: String::new(),
            blog_review: String::new(),
            address: String::new(),
            business_hours: String::new(),
            phone_number: String::new(),
            recommend_count: 0,
        }
    }

    /// Check whether any keyword appears in this store's category tag
    pub fn matches_category(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.category.contains(kw))
    }
}
