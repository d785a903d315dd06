use std::time::Duration;

use anyhow::Result;
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;

/// Shared outbound HTTP client handed by reference to every tool call.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    pub config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http, config })
    }

    /// GET against the Solscan API. Always asks for JSON; attaches the
    /// `token` header when an API key is configured.
    pub async fn get_explorer(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.config.solscan_api_url, path);
        let mut request = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(query);
        if let Some(key) = &self.config.solscan_api_key {
            request = request.header("token", key);
        }
        Self::fetch(request).await
    }

    /// Plain unauthenticated GET. Jupiter and DexScreener endpoints.
    pub async fn get(&self, url: &str) -> Result<Value> {
        Self::fetch(self.http.get(url)).await
    }

    /// Unauthenticated GET with serialized query parameters.
    pub async fn get_query<Q: Serialize + ?Sized>(&self, url: &str, query: &Q) -> Result<Value> {
        Self::fetch(self.http.get(url).query(query)).await
    }

    async fn fetch(request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}
