/// A single same-chain swap as requested by the caller.
#[derive(Debug, Clone)]
pub struct SwapRequest {
    pub wallet_id: String,
    pub sell_token: String,
    pub buy_token: String,
    /// Human units, e.g. "1.5"
    pub amount: String,
    pub chain_id: u64,
    pub dest_chain_id: Option<u64>,
    pub gasless: bool,
    pub skip_approval: bool,
}
