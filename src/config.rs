use anyhow::Context;
use std::env;
use url::Url;

const DEFAULT_SOLSCAN_API_URL: &str = "https://public-api.solscan.io";
const DEFAULT_JUPITER_TOKEN_LIST_URL: &str = "https://token.jup.ag/all";
const DEFAULT_JUPITER_PRICE_API_URL: &str = "https://price.jup.ag/v4/price";
const DEFAULT_JUPITER_QUOTE_API_URL: &str = "https://quote-api.jup.ag/v6/quote";
const DEFAULT_DEXSCREENER_API_URL: &str = "https://api.dexscreener.com";

#[derive(Clone)]
pub struct Config {
    pub solscan_api_url: String,
    /// Optional Solscan API key, sent as a `token` header when present.
    pub solscan_api_key: Option<String>,
    pub jupiter_token_list_url: String,
    pub jupiter_price_api_url: String,
    pub jupiter_quote_api_url: String,
    pub dexscreener_api_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            solscan_api_url: var_or("SOLSCAN_API_URL", DEFAULT_SOLSCAN_API_URL),
            solscan_api_key: env::var("SOLSCAN_API_KEY").ok().filter(|k| !k.is_empty()),
            jupiter_token_list_url: var_or("JUPITER_TOKEN_LIST_URL", DEFAULT_JUPITER_TOKEN_LIST_URL),
            jupiter_price_api_url: var_or("JUPITER_PRICE_API_URL", DEFAULT_JUPITER_PRICE_API_URL),
            jupiter_quote_api_url: var_or("JUPITER_QUOTE_API_URL", DEFAULT_JUPITER_QUOTE_API_URL),
            dexscreener_api_url: var_or("DEXSCREENER_API_URL", DEFAULT_DEXSCREENER_API_URL),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("SOLSCAN_API_URL", &self.solscan_api_url),
            ("JUPITER_TOKEN_LIST_URL", &self.jupiter_token_list_url),
            ("JUPITER_PRICE_API_URL", &self.jupiter_price_api_url),
            ("JUPITER_QUOTE_API_URL", &self.jupiter_quote_api_url),
            ("DEXSCREENER_API_URL", &self.dexscreener_api_url),
        ] {
            Url::parse(value).with_context(|| format!("{name} is not a valid URL: {value}"))?;
        }
        Ok(())
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}
