//! News controller: connects routes to news usecases

use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::news_query_dto::{HeadlinesQueryDto, SearchQueryDto};
use crate::api::dto::paginated_response::ArticlesPage;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct NewsController;

impl NewsController {
    pub async fn headlines(
        State(state): State<AppState>,
        Query(query): Query<HeadlinesQueryDto>,
    ) -> Result<Json<ArticlesPage>, AppError> {
        Ok(Json(state.news_service.headlines(query).await?))
    }

    pub async fn search(
        State(state): State<AppState>,
        Query(query): Query<SearchQueryDto>,
    ) -> Result<Json<ArticlesPage>, AppError> {
        Ok(Json(state.news_service.search(query).await?))
    }
}
