use super::{require_str, Tool};
use crate::client::ApiClient;
use anyhow::Result;
use serde_json::{json, Value};

pub struct AccountInfoTool;

#[async_trait::async_trait]
impl Tool for AccountInfoTool {
    fn name(&self) -> &'static str {
        "solscan_account_info"
    }

    fn description(&self) -> &'static str {
        "Get account information from Solscan"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "string",
                    "description": "The address of the Solana account"
                }
            },
            "required": ["address"]
        })
    }

    async fn call(&self, client: &ApiClient, args: Value) -> Result<Value> {
        let address = require_str(&args, "address")?;
        client.get_explorer(&format!("/account/{address}"), &[]).await
    }
}

pub struct TokenInfoTool;

#[async_trait::async_trait]
impl Tool for TokenInfoTool {
    fn name(&self) -> &'static str {
        "solscan_token_info"
    }

    fn description(&self) -> &'static str {
        "Get token information from Solscan"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "string",
                    "description": "The mint address of the token"
                }
            },
            "required": ["address"]
        })
    }

    async fn call(&self, client: &ApiClient, args: Value) -> Result<Value> {
        let address = require_str(&args, "address")?;
        client
            .get_explorer("/token/meta", &[("tokenAddress", address.to_string())])
            .await
    }
}

pub struct TokenHoldersTool;

#[async_trait::async_trait]
impl Tool for TokenHoldersTool {
    fn name(&self) -> &'static str {
        "solscan_token_holders"
    }

    fn description(&self) -> &'static str {
        "Get token holders from Solscan"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "string",
                    "description": "The mint address of the token"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of holders to return. Default 10."
                },
                "offset": {
                    "type": "integer",
                    "description": "Pagination offset. Default 0."
                }
            },
            "required": ["address"]
        })
    }

    async fn call(&self, client: &ApiClient, args: Value) -> Result<Value> {
        let address = require_str(&args, "address")?;
        let limit = args.get("limit").and_then(|v| v.as_u64()).unwrap_or(10);
        let offset = args.get("offset").and_then(|v| v.as_u64()).unwrap_or(0);

        client
            .get_explorer(
                "/token/holders",
                &[
                    ("tokenAddress", address.to_string()),
                    ("limit", limit.to_string()),
                    ("offset", offset.to_string()),
                ],
            )
            .await
    }
}

pub struct TransactionTool;

#[async_trait::async_trait]
impl Tool for TransactionTool {
    fn name(&self) -> &'static str {
        "solscan_transaction"
    }

    fn description(&self) -> &'static str {
        "Get transaction details from Solscan"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "signature": {
                    "type": "string",
                    "description": "The transaction signature"
                }
            },
            "required": ["signature"]
        })
    }

    async fn call(&self, client: &ApiClient, args: Value) -> Result<Value> {
        let signature = require_str(&args, "signature")?;
        client
            .get_explorer(&format!("/transaction/{signature}"), &[])
            .await
    }
}
