use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_ORACLE_URL: &str = "https://supply.bridgewatch.io/api/total-supply";
const DEFAULT_RECORDS_PATH: &str = "assets/networks.json";
const DEFAULT_LOCKED_SUPPLY: f64 = 300_000_000.0;
const DEFAULT_MAX_SUPPLY: f64 = 2_000_000_000.0;
const DEFAULT_PACING_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFamily {
    Evm,
    Solana,
}

#[derive(Debug, Clone)]
pub struct NetworkEndpoint {
    pub family: ChainFamily,
    pub rpc_url: String,
}

/// Everything tunable in one place, so tests can swap endpoints and delays
/// without touching globals.
#[derive(Debug, Clone)]
pub struct Settings {
    pub oracle_url: String,
    pub locked_supply: f64,
    pub max_supply: f64,
    pub home_network: String,
    pub category: String,
    pub records_path: PathBuf,
    pub pacing_delay: Duration,
    pub networks: HashMap<String, NetworkEndpoint>,
}

impl Settings {
    pub fn from_env() -> Self {
        let oracle_url =
            env::var("SUPPLY_ORACLE_URL").unwrap_or_else(|_| DEFAULT_ORACLE_URL.to_string());
        let locked_supply = env::var("LOCKED_SUPPLY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_LOCKED_SUPPLY);
        let max_supply = env::var("MAX_SUPPLY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_SUPPLY);
        let home_network = env::var("HOME_NETWORK").unwrap_or_else(|_| "Ethereum".to_string());
        let category = env::var("NETWORK_CATEGORY").unwrap_or_else(|_| "network".to_string());
        let records_path = env::var("RECORDS_PATH")
            .unwrap_or_else(|_| DEFAULT_RECORDS_PATH.to_string())
            .into();
        let pacing_delay = env::var("PACING_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or_else(|| Duration::from_millis(DEFAULT_PACING_DELAY_MS));

        Self {
            oracle_url,
            locked_supply,
            max_supply,
            home_network,
            category,
            records_path,
            pacing_delay,
            networks: default_networks(),
        }
    }

    pub fn endpoint(&self, name: &str) -> Option<&NetworkEndpoint> {
        self.networks.get(name)
    }
}

fn default_networks() -> HashMap<String, NetworkEndpoint> {
    [
        ("Ethereum", ChainFamily::Evm, "https://cloudflare-eth.com"),
        (
            "BNB Chain",
            ChainFamily::Evm,
            "https://bsc-dataseed.binance.org",
        ),
        ("Polygon", ChainFamily::Evm, "https://polygon-rpc.com"),
        (
            "Solana",
            ChainFamily::Solana,
            "https://api.mainnet-beta.solana.com",
        ),
    ]
    .into_iter()
    .map(|(name, family, default_url)| {
        let rpc_url = rpc_override(name).unwrap_or_else(|| default_url.to_string());
        (name.to_string(), NetworkEndpoint { family, rpc_url })
    })
    .collect()
}

// RPC_URL_ETHEREUM, RPC_URL_BNB_CHAIN, ...
fn rpc_override(name: &str) -> Option<String> {
    let key = format!("RPC_URL_{}", name.to_uppercase().replace(' ', "_"));
    env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_networks_cover_all_families() {
        let networks = default_networks();
        assert_eq!(networks.len(), 4);
        assert_eq!(networks["Ethereum"].family, ChainFamily::Evm);
        assert_eq!(networks["Solana"].family, ChainFamily::Solana);
        assert!(networks["BNB Chain"].rpc_url.starts_with("https://"));
    }
}
