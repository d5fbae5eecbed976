use crate::entity::{SwapRequest, SwapResult};
use crate::utils::shorten_address;
use crate::view::{print_json, OutputFormat};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SwapView: Send + Sync {
    async fn display_processing(&self, request: &SwapRequest) -> Result<()>;
    async fn display_swap_success(&self, result: &SwapResult) -> Result<()>;
}

pub struct ConsoleSwapView {
    format: OutputFormat,
}

impl ConsoleSwapView {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

#[async_trait]
impl SwapView for ConsoleSwapView {
    async fn display_processing(&self, request: &SwapRequest) -> Result<()> {
        if self.format == OutputFormat::Text {
            println!(
                "Preparing swap of {} {} to {} on chain {}... Getting quote...",
                request.amount,
                shorten_address(&request.sell_token),
                shorten_address(&request.buy_token),
                request.chain_id
            );
        }
        Ok(())
    }

    async fn display_swap_success(&self, result: &SwapResult) -> Result<()> {
        if self.format == OutputFormat::Json {
            return print_json(result);
        }

        if let Some(approval) = &result.approval_transaction_hash {
            println!("Approval transaction: {}", approval);
        }
        println!(
            "✅ Swap completed successfully!\n\
            Sold: {} (base units) of {}\n\
            Expected to receive: {} (base units) of {}\n\
            Transaction hash: {}\n\
            Check transaction: {}",
            result.quote.sell_amount,
            result.sell_token,
            result.quote.buy_amount.as_deref().unwrap_or("unknown"),
            result.buy_token,
            result.transaction_hash,
            result.explorer_url
        );
        Ok(())
    }
}
