//! Passive data-transfer shapes mirroring the upstream APIs' documented
//! response formats. Nothing here is mutated; the tools themselves return the
//! raw JSON body, and these types document the contracts it follows.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token metadata as embedded in DexScreener pair responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub logo: Option<String>,
    pub coingecko_id: Option<String>,
}

/// Price information for a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    pub usd: f64,
    pub usd_24h_change: Option<f64>,
    pub sol: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolscanAccountType {
    Token,
    Account,
    Nft,
    Program,
}

/// A Solana account as reported by Solscan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolscanAccountInfo {
    pub address: String,
    #[serde(rename = "type")]
    pub account_type: SolscanAccountType,
    pub owner: Option<String>,
    pub executable: bool,
    pub lamports: u64,
    pub rent_epoch: u64,
    pub data: Option<Value>,
}

/// A confirmed transaction as reported by Solscan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolscanTransactionInfo {
    pub signature: String,
    pub block: u64,
    pub slot: u64,
    /// Fee in lamports.
    pub fee: u64,
    pub status: String,
    pub timestamp: i64,
    pub signer: Vec<String>,
    pub log_messages: Option<Vec<String>>,
}

/// One entry in a token's holder list, ranked by amount held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolscanTokenHolderInfo {
    pub address: String,
    pub owner: Option<String>,
    pub amount: f64,
    pub percent: f64,
    pub rank: u32,
}

/// SPL token metadata as reported by Solscan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolscanTokenInfo {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub icon: Option<String>,
    pub decimals: u8,
    pub supply: f64,
    pub holder_count: Option<u64>,
    pub price: Option<Price>,
}

/// An entry in Jupiter's token list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JupiterToken {
    pub address: String,
    pub chain_id: u64,
    pub decimals: u8,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "logoURI")]
    pub logo_uri: Option<String>,
    pub tags: Option<Vec<String>>,
    pub verified: Option<bool>,
}

/// Query parameters for the Jupiter quote endpoint. Doubles as the argument
/// shape of the `jupiter_quote` tool; amounts are strings of the input
/// token's smallest unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JupiterQuoteRequest {
    pub input_mint: String,
    pub output_mint: String,
    pub amount: String,
    #[serde(default = "default_slippage_bps")]
    pub slippage_bps: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_fee_bps: Option<u16>,
    #[serde(default)]
    pub only_direct_routes: bool,
    #[serde(default)]
    pub as_legacy_transaction: bool,
}

fn default_slippage_bps() -> u16 {
    50
}

/// A single route within a Jupiter quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JupiterRoute {
    pub in_amount: String,
    pub out_amount: String,
    pub amount: String,
    pub other_amount_threshold: String,
    pub swap_mode: String,
    pub slippage_bps: u16,
    pub price_impact_pct: String,
    pub market_infos: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JupiterQuoteResponse {
    pub input_mint: String,
    pub output_mint: String,
    pub in_amount: String,
    pub out_amount: String,
    pub other_amount_threshold: String,
    pub swap_mode: String,
    pub slippage_bps: u16,
    pub price_impact_pct: String,
    pub routes: Vec<JupiterRoute>,
}

/// A trading pair as reported by DexScreener.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexScreenerPair {
    pub chain_id: String,
    pub dex_id: String,
    pub url: String,
    pub pair_address: String,
    pub base_token: TokenMetadata,
    pub quote_token: TokenMetadata,
    pub price_native: String,
    pub price_usd: Option<String>,
    pub txns: Value,
    pub volume: Value,
    pub liquidity: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DexScreenerSearchResponse {
    pub pairs: Vec<DexScreenerPair>,
}
