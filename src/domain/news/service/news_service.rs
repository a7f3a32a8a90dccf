//! News usecases: validate the query, fetch the full list upstream, then
//! paginate locally and compose the response.

use crate::api::dto::news_query_dto::{HeadlinesQueryDto, SearchQueryDto};
use crate::api::dto::paginated_response::ArticlesPage;
use crate::core::client::news_api_trait::NewsApi;
use crate::core::util::pagination::paginate;
use crate::domain::news::dto::page_params::PageParams;
use crate::errors::{upstream_failure, AppError};

const HEADLINES_FETCH_ERROR: &str = "News fetch from GNews failed";
const SEARCH_FETCH_ERROR: &str = "News search from GNews failed";

pub struct NewsService<C: NewsApi> {
    client: C,
}

impl<C: NewsApi> NewsService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn headlines(&self, raw: HeadlinesQueryDto) -> Result<ArticlesPage, AppError> {
        headlines_with_client(&self.client, raw).await
    }

    pub async fn search(&self, raw: SearchQueryDto) -> Result<ArticlesPage, AppError> {
        search_with_client(&self.client, raw).await
    }
}

async fn headlines_with_client<C: NewsApi>(
    client: &C,
    raw: HeadlinesQueryDto,
) -> Result<ArticlesPage, AppError> {
    let query = raw.validated()?;

    let articles = client
        .top_headlines(&query.category, &query.language, &query.country)
        .await
        .map_err(|e| upstream_failure(HEADLINES_FETCH_ERROR, e))?;

    // Page parameters are parsed only now, right before they are used.
    let params = PageParams::parse(&query.page, &query.page_size)?;
    Ok(paginate(&articles, params.page, params.page_size as usize).into())
}

async fn search_with_client<C: NewsApi>(
    client: &C,
    raw: SearchQueryDto,
) -> Result<ArticlesPage, AppError> {
    let query = raw.validated()?;

    let articles = client
        .search(
            &query.query,
            query.language.as_deref(),
            query.country.as_deref(),
        )
        .await
        .map_err(|e| upstream_failure(SEARCH_FETCH_ERROR, e))?;

    let params = PageParams::parse(&query.page, &query.page_size)?;
    Ok(paginate(&articles, params.page, params.page_size as usize).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use crate::domain::news::model::article::{Article, ArticleSource};

    #[derive(Debug, Clone, PartialEq)]
    enum RecordedCall {
        Headlines {
            category: String,
            language: String,
            country: String,
        },
        Search {
            query: String,
            language: Option<String>,
            country: Option<String>,
        },
    }

    #[derive(Default)]
    struct MockNewsApi {
        articles: Vec<Article>,
        fail: bool,
        calls: Mutex<Vec<RecordedCall>>,
    }

    #[async_trait]
    impl NewsApi for MockNewsApi {
        async fn top_headlines(
            &self,
            category: &str,
            language: &str,
            country: &str,
        ) -> Result<Vec<Article>> {
            self.calls.lock().unwrap().push(RecordedCall::Headlines {
                category: category.to_string(),
                language: language.to_string(),
                country: country.to_string(),
            });
            if self.fail {
                return Err(anyhow!("GNews top-headlines returned 503 Service Unavailable"));
            }
            Ok(self.articles.clone())
        }

        async fn search(
            &self,
            query: &str,
            language: Option<&str>,
            country: Option<&str>,
        ) -> Result<Vec<Article>> {
            self.calls.lock().unwrap().push(RecordedCall::Search {
                query: query.to_string(),
                language: language.map(str::to_string),
                country: country.map(str::to_string),
            });
            if self.fail {
                return Err(anyhow!("GNews search returned 503 Service Unavailable"));
            }
            Ok(self.articles.clone())
        }
    }

    fn article(n: usize) -> Article {
        Article {
            title: format!("article-{n}"),
            description: format!("description-{n}"),
            content: format!("content-{n}"),
            url: format!("https://example.com/{n}"),
            image: format!("https://example.com/{n}.png"),
            published_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            source: ArticleSource {
                name: "Example News".to_string(),
                url: "https://example.com".to_string(),
            },
        }
    }

    fn articles(n: usize) -> Vec<Article> {
        (1..=n).map(article).collect()
    }

    fn headlines_dto() -> HeadlinesQueryDto {
        HeadlinesQueryDto {
            category: Some("technology".into()),
            country: Some("us".into()),
            language: Some("en".into()),
            ..Default::default()
        }
    }

    fn search_dto() -> SearchQueryDto {
        SearchQueryDto {
            query: Some("rust".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn headlines_default_to_the_first_page_of_four() {
        let mock = MockNewsApi {
            articles: articles(5),
            ..Default::default()
        };

        let page = headlines_with_client(&mock, headlines_dto()).await.unwrap();

        assert_eq!(page.articles, articles(4));
        assert_eq!(page.total_items, 5);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.page_size, 4);
        assert_eq!(page.total_pages, 2);
        assert!(page.has_next_page);
        assert!(!page.has_previous_page);
    }

    #[tokio::test]
    async fn headlines_pass_validated_filters_to_the_client() {
        let mock = MockNewsApi {
            articles: articles(1),
            ..Default::default()
        };

        headlines_with_client(&mock, headlines_dto()).await.unwrap();

        let calls = mock.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![RecordedCall::Headlines {
                category: "technology".into(),
                language: "en".into(),
                country: "us".into(),
            }]
        );
    }

    #[tokio::test]
    async fn explicit_paging_selects_the_requested_slice() {
        let mock = MockNewsApi {
            articles: articles(5),
            ..Default::default()
        };
        let dto = HeadlinesQueryDto {
            page: Some("3".into()),
            page_size: Some("2".into()),
            ..headlines_dto()
        };

        let page = headlines_with_client(&mock, dto).await.unwrap();

        assert_eq!(page.articles, vec![article(5)]);
        assert_eq!(page.current_page, 3);
        assert!(!page.has_next_page);
        assert!(page.has_previous_page);
    }

    #[tokio::test]
    async fn page_beyond_the_end_is_empty_but_successful() {
        let mock = MockNewsApi {
            articles: articles(5),
            ..Default::default()
        };
        let dto = HeadlinesQueryDto {
            page: Some("4".into()),
            page_size: Some("2".into()),
            ..headlines_dto()
        };

        let page = headlines_with_client(&mock, dto).await.unwrap();

        assert!(page.articles.is_empty());
        assert!(!page.has_next_page);
        assert!(page.has_previous_page);
    }

    #[tokio::test]
    async fn missing_required_filter_fails_before_any_fetch() {
        let mock = MockNewsApi::default();
        let dto = HeadlinesQueryDto {
            country: None,
            ..headlines_dto()
        };

        let result = headlines_with_client(&mock, dto).await;

        assert!(matches!(result, Err(AppError::InvalidQuery)));
        assert!(mock.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_page_parameters_are_invalid_queries() {
        for (page, page_size) in [("abc", "2"), ("1", "0"), ("-1", "2"), ("1", "nope")] {
            let mock = MockNewsApi {
                articles: articles(5),
                ..Default::default()
            };
            let dto = HeadlinesQueryDto {
                page: Some(page.into()),
                page_size: Some(page_size.into()),
                ..headlines_dto()
            };

            let result = headlines_with_client(&mock, dto).await;
            assert!(
                matches!(result, Err(AppError::InvalidQuery)),
                "page={page} pageSize={page_size}"
            );
        }
    }

    #[tokio::test]
    async fn headline_fetch_failure_carries_the_route_message() {
        let mock = MockNewsApi {
            fail: true,
            ..Default::default()
        };

        let result = headlines_with_client(&mock, headlines_dto()).await;

        match result {
            Err(AppError::UpstreamFailure { message, .. }) => {
                assert_eq!(message, "News fetch from GNews failed");
            }
            other => panic!("expected upstream failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn search_defaults_to_three_results_per_page() {
        let mock = MockNewsApi {
            articles: articles(7),
            ..Default::default()
        };

        let page = search_with_client(&mock, search_dto()).await.unwrap();

        assert_eq!(page.articles, articles(3));
        assert_eq!(page.page_size, 3);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn search_omits_absent_optional_filters() {
        let mock = MockNewsApi {
            articles: articles(1),
            ..Default::default()
        };

        search_with_client(&mock, search_dto()).await.unwrap();

        let calls = mock.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![RecordedCall::Search {
                query: "rust".into(),
                language: None,
                country: None,
            }]
        );
    }

    #[tokio::test]
    async fn search_forwards_optional_filters_when_present() {
        let mock = MockNewsApi {
            articles: articles(1),
            ..Default::default()
        };
        let dto = SearchQueryDto {
            country: Some("gb".into()),
            language: Some("en".into()),
            ..search_dto()
        };

        search_with_client(&mock, dto).await.unwrap();

        let calls = mock.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![RecordedCall::Search {
                query: "rust".into(),
                language: Some("en".into()),
                country: Some("gb".into()),
            }]
        );
    }

    #[tokio::test]
    async fn search_failure_carries_its_own_route_message() {
        let mock = MockNewsApi {
            fail: true,
            ..Default::default()
        };

        let result = search_with_client(&mock, search_dto()).await;

        match result {
            Err(AppError::UpstreamFailure { message, .. }) => {
                assert_eq!(message, "News search from GNews failed");
            }
            other => panic!("expected upstream failure, got {other:?}"),
        }
    }
}
