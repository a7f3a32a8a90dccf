pub mod gnews_client;
pub mod news_api_trait;
