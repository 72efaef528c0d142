use std::cmp::Ordering;

use crate::chains::handler::ChainAdapters;
use crate::oracle::handler::SupplyOracle;
use crate::reconcile::pacer::Pacer;
use crate::records::dto::NetworkRecord;
use crate::settings::Settings;

/// Orchestrates one reconciliation pass over the record list.
///
/// Every per-source failure degrades to a zero balance; the pass itself never
/// fails.
pub struct Reconciler {
    settings: Settings,
    adapters: ChainAdapters,
    oracle: SupplyOracle,
}

impl Reconciler {
    pub fn new(settings: Settings) -> Self {
        let oracle = SupplyOracle::new(settings.oracle_url.clone(), settings.locked_supply);
        Self {
            settings,
            adapters: ChainAdapters::new(),
            oracle,
        }
    }

    pub async fn run(&self, records: Vec<NetworkRecord>) -> Vec<NetworkRecord> {
        let (mut eligible, skipped): (Vec<NetworkRecord>, Vec<NetworkRecord>) =
            records.into_iter().partition(|r| {
                r.category == self.settings.category && r.contract_address.is_some()
            });

        let circulating = self.oracle.circulating_supply().await;

        let mut pacer = Pacer::new(self.settings.pacing_delay);
        let mut bridged_total = 0.0;

        for record in eligible.iter_mut() {
            if record.name == self.settings.home_network {
                continue;
            }
            let Some(token_id) = record.contract_address.clone() else {
                continue;
            };

            pacer.wait().await;
            let balance = self.fetch_balance(&record.name, &token_id).await;
            if balance > self.settings.max_supply {
                log::warn!("{} balance {} exceeds max supply", record.name, balance);
            }

            bridged_total += balance;
            record.token_balance = Some(balance);
            log::info!("{}: {} tokens bridged", record.name, balance);
        }

        if let Some(home) = eligible
            .iter_mut()
            .find(|r| r.name == self.settings.home_network)
        {
            if circulating > 0.0 {
                // May go negative when bridged figures lead the oracle; the
                // display layer decides how to show that.
                home.token_balance = Some(circulating - bridged_total);
            } else if let Some(token_id) = home.contract_address.clone() {
                // Degraded mode: the home chain's own supply stands in for
                // the unbridged remainder.
                pacer.wait().await;
                home.token_balance = Some(self.fetch_balance(&home.name, &token_id).await);
            }
            log::info!("{}: {:?} tokens unbridged", home.name, home.token_balance);
        }

        sort_by_balance(&mut eligible);

        // Entries outside the reconciliation category stay in front, in
        // their original order.
        let mut merged = skipped;
        merged.extend(eligible);
        merged
    }

    async fn fetch_balance(&self, name: &str, token_id: &str) -> f64 {
        match self.settings.endpoint(name) {
            Some(endpoint) => self.adapters.fetch_balance(name, endpoint, token_id).await,
            None => {
                log::warn!("No RPC endpoint configured for {}", name);
                0.0
            }
        }
    }
}

/// Descending by balance, records with no balance last. Stable, so ties keep
/// their original order.
pub fn sort_by_balance(records: &mut [NetworkRecord]) {
    records.sort_by(|a, b| {
        let key = |r: &NetworkRecord| r.token_balance.unwrap_or(f64::NEG_INFINITY);
        key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal)
    });
}
