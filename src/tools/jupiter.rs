use super::Tool;
use crate::client::ApiClient;
use crate::models::JupiterQuoteRequest;
use anyhow::Result;
use serde_json::{json, Value};

pub struct TokenListTool;

#[async_trait::async_trait]
impl Tool for TokenListTool {
    fn name(&self) -> &'static str {
        "jupiter_tokens"
    }

    fn description(&self) -> &'static str {
        "Get list of tokens from Jupiter"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn call(&self, client: &ApiClient, _args: Value) -> Result<Value> {
        client.get(&client.config.jupiter_token_list_url).await
    }
}

pub struct PriceTool;

#[async_trait::async_trait]
impl Tool for PriceTool {
    fn name(&self) -> &'static str {
        "jupiter_price"
    }

    fn description(&self) -> &'static str {
        "Get token price from Jupiter"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "ids": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "List of token mint addresses"
                },
                "vsToken": {
                    "type": "string",
                    "description": "Token to get prices against. Default USDC."
                }
            },
            "required": ["ids"]
        })
    }

    async fn call(&self, client: &ApiClient, args: Value) -> Result<Value> {
        let ids = args["ids"]
            .as_array()
            .ok_or_else(|| anyhow::anyhow!("Missing ids"))?
            .iter()
            .map(|v| {
                v.as_str()
                    .ok_or_else(|| anyhow::anyhow!("ids must be strings"))
            })
            .collect::<Result<Vec<_>>>()?;
        let vs_token = args.get("vsToken").and_then(|v| v.as_str()).unwrap_or("USDC");

        client
            .get_query(
                &client.config.jupiter_price_api_url,
                &[("ids", ids.join(",")), ("vsToken", vs_token.to_string())],
            )
            .await
    }
}

pub struct QuoteTool;

#[async_trait::async_trait]
impl Tool for QuoteTool {
    fn name(&self) -> &'static str {
        "jupiter_quote"
    }

    fn description(&self) -> &'static str {
        "Get swap quote from Jupiter"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "inputMint": {
                    "type": "string",
                    "description": "Input token mint address"
                },
                "outputMint": {
                    "type": "string",
                    "description": "Output token mint address"
                },
                "amount": {
                    "type": "string",
                    "description": "Amount in the input token's smallest unit (lamports)"
                },
                "slippageBps": {
                    "type": "integer",
                    "description": "Allowed slippage in basis points (1 bps = 0.01%). Default 50."
                },
                "platformFeeBps": {
                    "type": "integer",
                    "description": "Platform fee in basis points"
                },
                "onlyDirectRoutes": {
                    "type": "boolean",
                    "description": "Only use direct routes"
                },
                "asLegacyTransaction": {
                    "type": "boolean",
                    "description": "Return as legacy transaction"
                }
            },
            "required": ["inputMint", "outputMint", "amount"]
        })
    }

    async fn call(&self, client: &ApiClient, args: Value) -> Result<Value> {
        let request: JupiterQuoteRequest = serde_json::from_value(args)?;
        client
            .get_query(&client.config.jupiter_quote_api_url, &request)
            .await
    }
}
