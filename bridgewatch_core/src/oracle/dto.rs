use serde::Deserialize;

/// The supply API has shipped both `{"total_supply": n}` and a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TotalSupplyBody {
    Object { total_supply: f64 },
    Bare(f64),
}

impl TotalSupplyBody {
    pub fn total_supply(&self) -> f64 {
        match self {
            TotalSupplyBody::Object { total_supply } => *total_supply,
            TotalSupplyBody::Bare(total) => *total,
        }
    }
}
