use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One display card in the records file.
///
/// The file is shared with entries of other categories; those pass through a
/// rewrite untouched, unknown keys included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkRecord {
    pub name: String,
    pub url: String,
    pub image: String,
    pub category: String,
    /// Token contract on account-model chains, mint address on Solana.
    #[serde(
        rename = "contractAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub contract_address: Option<String>,
    /// Whole token units. Absent until a reconciliation pass fills it in.
    #[serde(
        rename = "tokenBalance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub token_balance: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
