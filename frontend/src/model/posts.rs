use serde::Deserialize;

use crate::error::Result;

const CATALOG_JSON: &str = include_str!("../../data/additional_posts.json");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AdditionalPost {
    pub image: String,
    pub category: String,
    pub date: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub comment_count: u32,
}

/// The fixed set of cards appended by the "load more" control, in display order.
pub fn additional_posts() -> Result<Vec<AdditionalPost>> {
    Ok(serde_json::from_str(CATALOG_JSON)?)
}

/// A catalog entry paired with the comment-section id it is rendered under.
#[derive(Debug, Clone, PartialEq)]
pub struct InjectedCard {
    pub comments_id: String,
    pub post: AdditionalPost,
}

/// Hands out `new-1`, `new-2`, ... for injected cards.
///
/// Ids come from a counter rather than the clock, so cards created within the
/// same millisecond still get distinct ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentIdSource {
    issued: u64,
}

impl CommentIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.issued += 1;
        format!("new-{}", self.issued)
    }
}
