#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported chain: {0}")]
    UnsupportedChain(u64),

    #[error("Failed to resolve wallet address: {0}")]
    Resolution(String),

    #[error("Quote error: {0}")]
    Quote(String),

    #[error("Transaction submission failed: {0}")]
    Submission(String),

    #[error("Balance query failed: {0}")]
    Balance(String),

    #[error("Chain read failed: {0}")]
    ChainRead(String),
}

impl WalletError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
