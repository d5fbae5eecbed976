//! Wallet operations and token swaps for custody-held EVM wallets.
//!
//! Keys live with the custody service (Privy); swaps are priced and prepared by the
//! Bebop venue; read-only chain state comes from public JSON-RPC nodes.
pub mod bebop;
pub mod commands;
pub mod config;
pub mod di;
pub mod entity;
pub mod evm;
pub mod interactor;
pub mod presenter;
pub mod privy;
pub mod services;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use config::AppConfig;
pub use di::ServiceContainer;
pub use entity::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
