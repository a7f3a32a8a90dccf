use axum::{routing::get, Router};

use crate::api::controller::news::NewsController;
use crate::app_state::AppState;

pub fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(NewsController::headlines))
        .route("/search", get(NewsController::search))
}
