use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::core::client::news_api_trait::NewsApi;
use crate::core::config::GatewayConfig;
use crate::domain::news::model::article::{Article, GNewsResponse};

/// Thin client for the GNews v4 API. Holds one reusable HTTP client; no
/// retries and no request timeout.
pub struct GNewsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GNewsClient {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: config.gnews_base_url.clone(),
            api_key: config.gnews_api_key.clone(),
        })
    }

    /// Build the outbound URL: the key always goes first under `apikey`, then
    /// each present, non-empty filter under the upstream parameter name.
    /// Absent or empty values are left out entirely; GNews treats an empty
    /// parameter as an explicit filter rather than "no filter".
    fn endpoint_url(&self, path: &str, params: &[(&str, Option<&str>)]) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path
        ))
        .map_err(|e| anyhow!("Invalid GNews URL for {}: {}", path, e))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            for (name, value) in params {
                if let Some(value) = value {
                    if !value.is_empty() {
                        pairs.append_pair(name, value);
                    }
                }
            }
        }

        Ok(url)
    }

    // The URL carries the key, so it is never logged here.
    async fn fetch_articles(&self, path: &str, url: Url) -> Result<Vec<Article>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to call GNews {}: {}", path, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("GNews {} returned {}: {}", path, status, text));
        }

        let data: GNewsResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to decode GNews {} response: {}", path, e))?;

        Ok(data.articles)
    }
}

#[async_trait]
impl NewsApi for GNewsClient {
    async fn top_headlines(
        &self,
        category: &str,
        language: &str,
        country: &str,
    ) -> Result<Vec<Article>> {
        let url = self.endpoint_url(
            "top-headlines",
            &[
                ("category", Some(category)),
                ("lang", Some(language)),
                ("country", Some(country)),
            ],
        )?;

        debug!(
            "Fetching GNews top-headlines (category={}, lang={}, country={})",
            category, language, country
        );
        self.fetch_articles("top-headlines", url).await
    }

    async fn search(
        &self,
        query: &str,
        language: Option<&str>,
        country: Option<&str>,
    ) -> Result<Vec<Article>> {
        let url = self.endpoint_url(
            "search",
            &[("q", Some(query)), ("lang", language), ("country", country)],
        )?;

        debug!("Fetching GNews search (q={})", query);
        self.fetch_articles("search", url).await
    }
}
