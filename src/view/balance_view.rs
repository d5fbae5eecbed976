use crate::entity::TokenBalance;
use crate::evm::units::format_units;
use crate::view::{print_json, OutputFormat};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait BalanceView: Send + Sync {
    async fn display_balances(&self, balances: &[TokenBalance]) -> Result<()>;
}

pub struct ConsoleBalanceView {
    format: OutputFormat,
}

impl ConsoleBalanceView {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn format_balance(balance: &TokenBalance) -> String {
        let amount = match balance.display_amount() {
            Some(amount) => amount.to_string(),
            None => balance
                .raw_value
                .parse::<u128>()
                .map(|raw| format_units(raw, balance.raw_value_decimals))
                .unwrap_or_else(|_| balance.raw_value.clone()),
        };

        match balance.usd_value() {
            Some(usd) => format!(
                "{:<10} {:<8} {} (${})",
                balance.chain,
                balance.asset.to_uppercase(),
                amount,
                usd
            ),
            None => format!(
                "{:<10} {:<8} {}",
                balance.chain,
                balance.asset.to_uppercase(),
                amount
            ),
        }
    }
}

#[async_trait]
impl BalanceView for ConsoleBalanceView {
    async fn display_balances(&self, balances: &[TokenBalance]) -> Result<()> {
        if self.format == OutputFormat::Json {
            return print_json(&balances);
        }

        if balances.is_empty() {
            println!("No balances reported");
            return Ok(());
        }

        println!("Balances:");
        for balance in balances {
            println!("  {}", Self::format_balance(balance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn formats_with_and_without_usd() {
        let mut balance = TokenBalance {
            chain: "base".to_string(),
            asset: "eth".to_string(),
            raw_value: "1500000000000000000".to_string(),
            raw_value_decimals: 18,
            display_values: HashMap::from([
                ("eth".to_string(), "1.5".to_string()),
                ("usd".to_string(), "3750.00".to_string()),
            ]),
        };
        assert_eq!(
            ConsoleBalanceView::format_balance(&balance),
            "base       ETH      1.5 ($3750.00)"
        );

        balance.display_values.clear();
        assert_eq!(
            ConsoleBalanceView::format_balance(&balance),
            "base       ETH      1.5"
        );
    }
}
