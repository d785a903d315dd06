//! MCP server exposing Solana data tools backed by the Solscan, Jupiter and
//! DexScreener public APIs. Every tool is a single outbound GET whose JSON
//! body is returned to the caller unchanged.

pub mod client;
pub mod config;
pub mod models;
pub mod server;
pub mod tools;
