//! Recommendation embed markers
//!
//! A recommendation message carries the store name in its embed title and a
//! footer beginning with a fixed sentinel. That footer is how reaction events
//! are recognized as belonging to a tracked recommendation.

/// Footer prefix that marks an embed as a tracked recommendation
pub const RECOMMEND_FOOTER_SENTINEL: &str = "추천 수:";

/// Build the footer text for a recommendation embed
pub fn recommend_footer(count: u32) -> String {
    format!("{RECOMMEND_FOOTER_SENTINEL} {count}")
}

/// Store identity recovered from a recommendation embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationTag {
    pub store_name: String,
}

impl RecommendationTag {
    /// Parse the embed title and footer of a message.
    ///
    /// Returns `None` unless the footer begins with the sentinel and a
    /// non-empty title is present, meaning the message is not one of ours.
    pub fn from_embed(title: Option<&str>, footer: Option<&str>) -> Option<Self> {
        let footer = footer?;
        if !footer.starts_with(RECOMMEND_FOOTER_SENTINEL) {
            return None;
        }
        let title = title?.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            store_name: title.to_string(),
        })
    }
}
