use std::sync::Arc;

use anyhow::Result;

use crate::core::client::gnews_client::GNewsClient;
use crate::core::config::GatewayConfig;
use crate::domain::news::service::news_service::NewsService;

#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService<GNewsClient>>,
}

pub fn build_app_state(config: &GatewayConfig) -> Result<AppState> {
    let client = GNewsClient::new(config)?;

    Ok(AppState {
        news_service: Arc::new(NewsService::new(client)),
    })
}
