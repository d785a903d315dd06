use super::{require_str, Tool};
use crate::client::ApiClient;
use anyhow::Result;
use serde_json::{json, Value};

pub struct TokenTool;

#[async_trait::async_trait]
impl Tool for TokenTool {
    fn name(&self) -> &'static str {
        "dexscreener_token"
    }

    fn description(&self) -> &'static str {
        "Get token information from DEX Screener"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "tokenAddress": {
                    "type": "string",
                    "description": "The token address"
                }
            },
            "required": ["tokenAddress"]
        })
    }

    async fn call(&self, client: &ApiClient, args: Value) -> Result<Value> {
        let token_address = require_str(&args, "tokenAddress")?;
        let url = format!(
            "{}/latest/dex/tokens/{token_address}",
            client.config.dexscreener_api_url
        );
        client.get(&url).await
    }
}

pub struct PairTool;

#[async_trait::async_trait]
impl Tool for PairTool {
    fn name(&self) -> &'static str {
        "dexscreener_pair"
    }

    fn description(&self) -> &'static str {
        "Get pair information from DEX Screener"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "pairAddress": {
                    "type": "string",
                    "description": "The pair address"
                }
            },
            "required": ["pairAddress"]
        })
    }

    async fn call(&self, client: &ApiClient, args: Value) -> Result<Value> {
        let pair_address = require_str(&args, "pairAddress")?;
        let url = format!(
            "{}/latest/dex/pairs/solana/{pair_address}",
            client.config.dexscreener_api_url
        );
        client.get(&url).await
    }
}

pub struct SearchTool;

#[async_trait::async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &'static str {
        "dexscreener_search"
    }

    fn description(&self) -> &'static str {
        "Search on DEX Screener"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (token name, symbol, or address)"
                }
            },
            "required": ["query"]
        })
    }

    async fn call(&self, client: &ApiClient, args: Value) -> Result<Value> {
        let query = require_str(&args, "query")?;
        let url = format!("{}/latest/dex/search", client.config.dexscreener_api_url);
        client.get_query(&url, &[("q", query.to_string())]).await
    }
}
