use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::chains::dto::{EvmCallResponse, TokenSupplyResponse};
use crate::settings::{ChainFamily, NetworkEndpoint};

const TOTAL_SUPPLY_SELECTOR: &str = "0x18160ddd";
const DECIMALS_SELECTOR: &str = "0x313ce567";

/// Read one token amount, in whole token units, from a chain RPC endpoint.
#[async_trait]
pub trait ChainAdapter: Send + Sync {
    async fn fetch(&self, rpc_url: &str, token_id: &str) -> Result<f64>;
}

#[derive(Clone)]
pub struct EvmAdapter {
    client: Client,
}

impl EvmAdapter {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn eth_call(&self, rpc_url: &str, contract: &str, data: &str) -> Result<u128> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_call",
            "params": [{ "to": contract, "data": data }, "latest"],
        });

        let response = self
            .client
            .post(rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach RPC endpoint: {}", e))?;

        if !response.status().is_success() {
            return Err(anyhow!("RPC endpoint returned {}", response.status()));
        }

        let body = response
            .json::<EvmCallResponse>()
            .await
            .map_err(|e| anyhow!("Failed to parse eth_call response: {}", e))?;

        if let Some(error) = body.error {
            return Err(anyhow!("RPC error {}: {}", error.code, error.message));
        }

        let word = body
            .result
            .ok_or_else(|| anyhow!("eth_call response has no result"))?;

        decode_uint(&word)
    }
}

#[async_trait]
impl ChainAdapter for EvmAdapter {
    async fn fetch(&self, rpc_url: &str, token_id: &str) -> Result<f64> {
        let raw = self
            .eth_call(rpc_url, token_id, TOTAL_SUPPLY_SELECTOR)
            .await?;
        let decimals = self.eth_call(rpc_url, token_id, DECIMALS_SELECTOR).await?;

        if decimals > 36 {
            return Err(anyhow!("Implausible decimals value: {}", decimals));
        }

        Ok(scale_amount(raw, decimals as u32))
    }
}

#[derive(Clone)]
pub struct SolanaAdapter {
    client: Client,
}

impl SolanaAdapter {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ChainAdapter for SolanaAdapter {
    async fn fetch(&self, rpc_url: &str, token_id: &str) -> Result<f64> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getTokenSupply",
            "params": [token_id],
        });

        let response = self
            .client
            .post(rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach RPC endpoint: {}", e))?;

        if !response.status().is_success() {
            return Err(anyhow!("RPC endpoint returned {}", response.status()));
        }

        let body = response
            .json::<TokenSupplyResponse>()
            .await
            .map_err(|e| anyhow!("Failed to parse getTokenSupply response: {}", e))?;

        if let Some(error) = body.error {
            return Err(anyhow!("RPC error {}: {}", error.code, error.message));
        }

        let value = body
            .result
            .ok_or_else(|| anyhow!("getTokenSupply response has no result"))?
            .value;

        // Supply arrives pre-scaled; pass it through untouched.
        value
            .ui_amount
            .ok_or_else(|| anyhow!("getTokenSupply response has no uiAmount"))
    }
}

/// One adapter per network family, picked by endpoint configuration.
pub struct ChainAdapters {
    evm: EvmAdapter,
    solana: SolanaAdapter,
}

impl ChainAdapters {
    pub fn new() -> Self {
        Self {
            evm: EvmAdapter::new(),
            solana: SolanaAdapter::new(),
        }
    }

    fn adapter_for(&self, family: ChainFamily) -> &dyn ChainAdapter {
        match family {
            ChainFamily::Evm => &self.evm,
            ChainFamily::Solana => &self.solana,
        }
    }

    /// Fetch a network balance, degrading any failure to zero. One dead
    /// endpoint must not abort the whole reconciliation pass.
    pub async fn fetch_balance(
        &self,
        name: &str,
        endpoint: &NetworkEndpoint,
        token_id: &str,
    ) -> f64 {
        match self
            .adapter_for(endpoint.family)
            .fetch(&endpoint.rpc_url, token_id)
            .await
        {
            Ok(amount) => amount,
            Err(e) => {
                log::warn!("Balance fetch failed for {}: {}", name, e);
                0.0
            }
        }
    }
}

impl Default for ChainAdapters {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_uint(word: &str) -> Result<u128> {
    let digits = word.trim_start_matches("0x").trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    if digits.len() > 32 {
        return Err(anyhow!("uint overflows 128 bits: {}", word));
    }
    u128::from_str_radix(digits, 16).map_err(|e| anyhow!("Failed to decode uint {}: {}", word, e))
}

fn scale_amount(raw: u128, decimals: u32) -> f64 {
    raw as f64 / 10f64.powi(decimals as i32)
}
