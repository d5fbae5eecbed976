pub mod client;
pub mod models;

pub use client::{CustodyService, PrivyClient, DEFAULT_PRIVY_API_URL};
pub use models::PrivyWallet;
