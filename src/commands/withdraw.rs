use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use super::{CommandContext, CommandHandler};
use crate::interactor::WithdrawRequest;
use crate::presenter::withdraw_presenter::{WithdrawPresenter, WithdrawPresenterImpl};
use crate::view::withdraw_view::ConsoleWithdrawView;

#[derive(Args, Debug)]
pub struct WithdrawArgs {
    /// Recipient address
    pub recipient: String,
    /// Amount in human units
    pub amount: String,
    /// ERC-20 token address; omit for the native token
    #[arg(long)]
    pub token: Option<String>,
    /// Token decimals; read from the token contract when omitted
    #[arg(long)]
    pub decimals: Option<u32>,
    /// Chain id
    #[arg(long, default_value_t = 8453)]
    pub chain: u64,
}

impl CommandHandler for WithdrawArgs {
    async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let request = WithdrawRequest {
            wallet_id: ctx.wallet_id.clone(),
            chain_id: self.chain,
            recipient: self.recipient,
            amount: self.amount,
            token: self.token,
            decimals: self.decimals,
        };

        let interactor = ctx.services.withdraw_interactor();
        let view = Arc::new(ConsoleWithdrawView::new(ctx.format));
        let presenter = WithdrawPresenterImpl::new(interactor, view);
        presenter.process_withdraw(request).await
    }
}
