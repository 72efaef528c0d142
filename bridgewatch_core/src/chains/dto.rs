use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EvmCallResponse {
    pub result: Option<String>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct TokenSupplyResponse {
    pub result: Option<TokenSupplyResult>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct TokenSupplyResult {
    pub value: TokenSupplyValue,
}

#[derive(Debug, Deserialize)]
pub struct TokenSupplyValue {
    #[serde(rename = "uiAmount")]
    pub ui_amount: Option<f64>,
}
