use anyhow::Result;
use serde::Serialize;

pub mod balance_view;
pub mod send_view;
pub mod swap_view;
pub mod wallet_view;
pub mod withdraw_view;

/// How console views render results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
