use crate::entity::QuoteSummary;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResult {
    pub success: bool,
    pub transaction_hash: String,
    pub sell_token: String,
    pub buy_token: String,
    pub amount: String,
    pub chain_id: u64,
    pub quote: QuoteSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_transaction_hash: Option<String>,
    pub explorer_url: String,
}
