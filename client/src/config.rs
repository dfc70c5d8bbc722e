use anyhow::Result;
use std::env;

pub const RUN_ENDPOINT: &str = "/api/v1/hackrx/run";

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Connection settings for the remote answer service, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub bearer_token: String,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("CLAIRE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let bearer_token = env::var("CLAIRE_API_TOKEN")
            .map_err(|_| anyhow::anyhow!("CLAIRE_API_TOKEN environment variable not set"))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        })
    }

    pub fn run_url(&self) -> String {
        format!("{}{}", self.base_url, RUN_ENDPOINT)
    }
}
