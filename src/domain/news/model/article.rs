use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news item as returned by the upstream provider. Produced entirely
/// by the upstream decode and consumed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub content: String,
    pub url: String,
    pub image: String,
    pub published_at: DateTime<Utc>,
    pub source: ArticleSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub name: String,
    pub url: String,
}

/// The upstream response contract. A body that does not decode into this
/// shape is an upstream failure, not a pass-through.
#[derive(Debug, Deserialize)]
pub struct GNewsResponse {
    pub articles: Vec<Article>,
}
