use crate::interactor::SendResult;
use crate::view::{print_json, OutputFormat};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SendView: Send + Sync {
    async fn display_send_success(&self, result: &SendResult) -> Result<()>;
}

pub struct ConsoleSendView {
    format: OutputFormat,
}

impl ConsoleSendView {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

#[async_trait]
impl SendView for ConsoleSendView {
    async fn display_send_success(&self, result: &SendResult) -> Result<()> {
        if self.format == OutputFormat::Json {
            return print_json(result);
        }

        println!(
            "✅ Transaction sent to {} (value {} wei)\n\
            Transaction hash: {}\n\
            Check transaction: {}",
            result.to, result.value, result.transaction_hash, result.explorer_url
        );
        Ok(())
    }
}
