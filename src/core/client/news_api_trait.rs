use anyhow::Result;
use async_trait::async_trait;

use crate::domain::news::model::article::Article;

/// Upstream news provider seam. Implementations fetch the full article list
/// for the given filters; pagination happens locally, after the fetch.
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Fetch every headline matching the category/language/country filters.
    async fn top_headlines(
        &self,
        category: &str,
        language: &str,
        country: &str,
    ) -> Result<Vec<Article>>;

    /// Full-text search. `language` and `country` are optional narrowing
    /// filters and are omitted from the upstream request when absent.
    async fn search(
        &self,
        query: &str,
        language: Option<&str>,
        country: Option<&str>,
    ) -> Result<Vec<Article>>;
}
