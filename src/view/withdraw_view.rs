use crate::interactor::WithdrawResult;
use crate::utils::shorten_address;
use crate::view::{print_json, OutputFormat};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait WithdrawView: Send + Sync {
    async fn display_withdraw_success(&self, result: &WithdrawResult) -> Result<()>;
}

pub struct ConsoleWithdrawView {
    format: OutputFormat,
}

impl ConsoleWithdrawView {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

#[async_trait]
impl WithdrawView for ConsoleWithdrawView {
    async fn display_withdraw_success(&self, result: &WithdrawResult) -> Result<()> {
        if self.format == OutputFormat::Json {
            return print_json(result);
        }

        let token = if result.token == "native" {
            "native token".to_string()
        } else {
            shorten_address(&result.token)
        };

        println!(
            "✅ Withdrawal successful!\n\
            Amount: {} {}\n\
            Recipient: {}\n\
            Transaction hash: {}\n\
            Check transaction: {}",
            result.amount, token, result.recipient, result.transaction_hash, result.explorer_url
        );
        Ok(())
    }
}
