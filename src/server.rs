use crate::client::ApiClient;
use crate::tools::{self, Tool};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::{self, BufRead};
use tracing::{debug, error, info};

const SERVER_NAME: &str = "solana-api";
const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Serialize, Deserialize, Debug)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Option<Value>,
    id: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonRpcResponse {
    jsonrpc: String,
    result: Option<Value>,
    error: Option<JsonRpcError>,
    id: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonRpcError {
    code: i32,
    message: String,
    data: Option<Value>,
}

impl JsonRpcResponse {
    fn ok(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            result: Some(result),
            error: None,
            id,
        }
    }

    fn err(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
            id,
        }
    }
}

pub async fn run(client: ApiClient) -> Result<()> {
    let tools: HashMap<String, Box<dyn Tool>> = tools::all()
        .into_iter()
        .map(|tool| (tool.name().to_string(), tool))
        .collect();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    info!("MCP Server Ready. Waiting for JSON-RPC requests on stdin...");

    while let Some(Ok(line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }

        debug!("Received request: {}", line);

        let req: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                continue;
            }
        };

        // Notifications carry no id and expect no reply.
        if req.method.starts_with("notifications/") {
            continue;
        }

        let response = handle_request(&req, &client, &tools).await;

        let response_str = serde_json::to_string(&response)?;
        println!("{}", response_str);
    }

    Ok(())
}

async fn handle_request(
    req: &JsonRpcRequest,
    client: &ApiClient,
    tools: &HashMap<String, Box<dyn Tool>>,
) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => JsonRpcResponse::ok(
            req.id.clone(),
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),
        "tools/list" => {
            let tool_list: Vec<Value> = tools
                .values()
                .map(|t| {
                    json!({
                        "name": t.name(),
                        "description": t.description(),
                        "inputSchema": t.schema()
                    })
                })
                .collect();

            JsonRpcResponse::ok(req.id.clone(), json!({ "tools": tool_list }))
        }
        "tools/call" => handle_tool_call(req, client, tools).await,
        _ => JsonRpcResponse::err(req.id.clone(), -32601, "Method not found".into()),
    }
}

async fn handle_tool_call(
    req: &JsonRpcRequest,
    client: &ApiClient,
    tools: &HashMap<String, Box<dyn Tool>>,
) -> JsonRpcResponse {
    let Some(params) = &req.params else {
        return JsonRpcResponse::err(req.id.clone(), -32602, "Missing params".into());
    };
    let Some(name) = params.get("name").and_then(|v| v.as_str()) else {
        return JsonRpcResponse::err(req.id.clone(), -32602, "Missing 'name' parameter".into());
    };
    let Some(tool) = tools.get(name) else {
        return JsonRpcResponse::err(req.id.clone(), -32601, format!("Tool not found: {name}"));
    };

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match tool.call(client, args).await {
        Ok(result) => JsonRpcResponse::ok(
            req.id.clone(),
            // Standard MCP 'content' for compatibility, plus 'data' for agents.
            json!({
                "content": [{
                    "type": "text",
                    "text": serde_json::to_string_pretty(&result)
                        .unwrap_or_else(|_| result.to_string())
                }],
                "data": result
            }),
        ),
        Err(e) => JsonRpcResponse::err(
            req.id.clone(),
            -32603,
            format!("Tool execution failed: {}", e),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_client() -> ApiClient {
        // Unroutable endpoints; dispatch tests never reach the network.
        ApiClient::new(Config {
            solscan_api_url: "http://127.0.0.1:9".into(),
            solscan_api_key: None,
            jupiter_token_list_url: "http://127.0.0.1:9/all".into(),
            jupiter_price_api_url: "http://127.0.0.1:9/price".into(),
            jupiter_quote_api_url: "http://127.0.0.1:9/quote".into(),
            dexscreener_api_url: "http://127.0.0.1:9".into(),
        })
        .unwrap()
    }

    fn registry() -> HashMap<String, Box<dyn Tool>> {
        tools::all()
            .into_iter()
            .map(|tool| (tool.name().to_string(), tool))
            .collect()
    }

    fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".into(),
            method: method.into(),
            params,
            id: Some(json!(1)),
        }
    }

    #[tokio::test]
    async fn initialize_reports_server_info() {
        let client = test_client();
        let response = handle_request(&request("initialize", None), &client, &registry()).await;

        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn tools_list_exposes_every_tool() {
        let client = test_client();
        let response = handle_request(&request("tools/list", None), &client, &registry()).await;

        let result = response.result.unwrap();
        let listed = result["tools"].as_array().unwrap();
        assert_eq!(listed.len(), 10);

        let names: Vec<&str> = listed
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        for expected in [
            "solscan_account_info",
            "solscan_token_info",
            "solscan_token_holders",
            "solscan_transaction",
            "jupiter_tokens",
            "jupiter_price",
            "jupiter_quote",
            "dexscreener_token",
            "dexscreener_pair",
            "dexscreener_search",
        ] {
            assert!(names.contains(&expected), "missing tool: {expected}");
        }

        for tool in listed {
            assert!(tool["inputSchema"]["type"].is_string());
        }
    }

    #[tokio::test]
    async fn unknown_method_is_rejected() {
        let client = test_client();
        let response = handle_request(&request("resources/list", None), &client, &registry()).await;

        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn call_without_params_is_rejected() {
        let client = test_client();
        let response = handle_request(&request("tools/call", None), &client, &registry()).await;

        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn call_unknown_tool_is_rejected() {
        let client = test_client();
        let params = json!({ "name": "no_such_tool", "arguments": {} });
        let response =
            handle_request(&request("tools/call", Some(params)), &client, &registry()).await;

        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert!(error.message.contains("no_such_tool"));
    }

    #[tokio::test]
    async fn failed_tool_call_maps_to_internal_error() {
        let client = test_client();
        let params = json!({
            "name": "solscan_account_info",
            "arguments": {}
        });
        let response =
            handle_request(&request("tools/call", Some(params)), &client, &registry()).await;

        let error = response.error.unwrap();
        assert_eq!(error.code, -32603);
        assert!(error.message.contains("Missing address"));
    }
}
