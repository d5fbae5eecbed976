mod quote;
mod swap_request;
mod swap_result;
mod token_balance;
mod transaction;
mod wallet_error;

pub use quote::{Quote, QuoteSummary};
pub use swap_request::SwapRequest;
pub use swap_result::SwapResult;
pub use token_balance::TokenBalance;
pub use transaction::{PreparedTransaction, TransactionResult};
pub use wallet_error::WalletError;
