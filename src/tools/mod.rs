pub mod dexscreener;
pub mod jupiter;
pub mod solscan;

use crate::client::ApiClient;
use serde_json::Value;

#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn schema(&self) -> Value;
    async fn call(&self, client: &ApiClient, args: Value) -> anyhow::Result<Value>;
}

/// Every tool the server exposes.
pub fn all() -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(solscan::AccountInfoTool),
        Box::new(solscan::TokenInfoTool),
        Box::new(solscan::TokenHoldersTool),
        Box::new(solscan::TransactionTool),
        Box::new(jupiter::TokenListTool),
        Box::new(jupiter::PriceTool),
        Box::new(jupiter::QuoteTool),
        Box::new(dexscreener::TokenTool),
        Box::new(dexscreener::PairTool),
        Box::new(dexscreener::SearchTool),
    ]
}

pub(crate) fn require_str<'a>(args: &'a Value, key: &str) -> anyhow::Result<&'a str> {
    args[key]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("Missing {key}"))
}
