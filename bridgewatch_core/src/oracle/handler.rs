use anyhow::{anyhow, Result};
use reqwest::Client;

use crate::oracle::dto::TotalSupplyBody;

#[derive(Clone)]
pub struct SupplyOracle {
    client: Client,
    base_url: String,
    locked_supply: f64,
}

impl SupplyOracle {
    pub fn new(base_url: String, locked_supply: f64) -> Self {
        Self {
            client: Client::new(),
            base_url,
            locked_supply,
        }
    }

    async fn fetch_total_supply(&self) -> Result<f64> {
        let response = self
            .client
            .get(&self.base_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach supply API: {}", e))?;

        if !response.status().is_success() {
            return Err(anyhow!("Supply API returned {}", response.status()));
        }

        let body = response
            .json::<TotalSupplyBody>()
            .await
            .map_err(|e| anyhow!("Failed to parse supply response: {}", e))?;

        Ok(body.total_supply())
    }

    /// Circulating supply = total supply minus the locked reserve. Returns 0
    /// when the API is unavailable; callers treat 0 as "unknown".
    pub async fn circulating_supply(&self) -> f64 {
        match self.fetch_total_supply().await {
            Ok(total) => total - self.locked_supply,
            Err(e) => {
                log::warn!("Circulating supply unavailable: {}", e);
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_circulating_supply_subtracts_locked_reserve() {
        let mut server = mockito::Server::new_async().await;

        let _supply = server
            .mock("GET", "/")
            .with_body(r#"{"total_supply": 1000000000}"#)
            .create_async()
            .await;

        let oracle = SupplyOracle::new(server.url(), 300_000_000.0);
        assert_eq!(oracle.circulating_supply().await, 700_000_000.0);
    }

    #[tokio::test]
    async fn test_circulating_supply_accepts_bare_number() {
        let mut server = mockito::Server::new_async().await;

        let _supply = server
            .mock("GET", "/")
            .with_body("1000000000")
            .create_async()
            .await;

        let oracle = SupplyOracle::new(server.url(), 300_000_000.0);
        assert_eq!(oracle.circulating_supply().await, 700_000_000.0);
    }

    #[tokio::test]
    async fn test_circulating_supply_degrades_to_zero_on_http_error() {
        let mut server = mockito::Server::new_async().await;

        let _down = server.mock("GET", "/").with_status(502).create_async().await;

        let oracle = SupplyOracle::new(server.url(), 300_000_000.0);
        assert_eq!(oracle.circulating_supply().await, 0.0);
    }

    #[tokio::test]
    async fn test_circulating_supply_degrades_to_zero_on_malformed_body() {
        let mut server = mockito::Server::new_async().await;

        let _garbage = server
            .mock("GET", "/")
            .with_body(r#"{"unexpected": "shape"}"#)
            .create_async()
            .await;

        let oracle = SupplyOracle::new(server.url(), 300_000_000.0);
        assert_eq!(oracle.circulating_supply().await, 0.0);
    }
}
