use std::env;
use std::fmt;

use anyhow::{anyhow, Result};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_GNEWS_BASE_URL: &str = "https://gnews.io/api/v4";

/// Process configuration, read from the environment once at startup and
/// injected from there. The GNews key is a secret and must not appear in logs.
#[derive(Clone)]
pub struct GatewayConfig {
    pub bind_addr: String,
    pub gnews_base_url: String,
    pub gnews_api_key: String,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        let gnews_api_key =
            env::var("GNEWS_API_KEY").map_err(|_| anyhow!("GNEWS_API_KEY must be set"))?;
        let bind_addr =
            env::var("NEWSGATE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let gnews_base_url = env::var("NEWSGATE_GNEWS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GNEWS_BASE_URL.to_string());

        Ok(Self {
            bind_addr,
            gnews_base_url,
            gnews_api_key,
        })
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("bind_addr", &self.bind_addr)
            .field("gnews_base_url", &self.gnews_base_url)
            .field("gnews_api_key", &"<redacted>")
            .finish()
    }
}
