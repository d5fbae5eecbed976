use crate::entity::TokenBalance;
use serde::{Deserialize, Serialize};

pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";
pub const ETHEREUM_CHAIN_TYPE: &str = "ethereum";

#[derive(Debug, Clone, Deserialize)]
pub struct PrivyWallet {
    pub id: String,
    pub address: String,
    pub chain_type: String,
}

#[derive(Debug, Serialize)]
pub struct RpcTransaction {
    pub to: String,
    pub data: String,
    /// Hex quantity, e.g. `0x0`
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct RpcParams {
    pub transaction: RpcTransaction,
}

#[derive(Debug, Serialize)]
pub struct SendTransactionRequest {
    pub method: &'static str,
    pub caip2: String,
    pub chain_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<bool>,
    pub params: RpcParams,
}

#[derive(Debug, Deserialize)]
pub struct SendTransactionData {
    pub hash: String,
    pub caip2: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendTransactionResponse {
    pub method: Option<String>,
    pub data: SendTransactionData,
}

#[derive(Debug, Deserialize)]
pub struct BalanceResponse {
    #[serde(default)]
    pub balances: Vec<TokenBalance>,
}
