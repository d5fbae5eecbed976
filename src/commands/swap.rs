use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use super::{CommandContext, CommandHandler};
use crate::entity::SwapRequest;
use crate::presenter::swap_presenter::{SwapPresenter, SwapPresenterImpl};
use crate::view::swap_view::ConsoleSwapView;

#[derive(Args, Debug)]
pub struct SwapArgs {
    /// Address of the token to sell
    pub sell_token: String,
    /// Address of the token to buy
    pub buy_token: String,
    /// Amount to sell in human units (converted assuming 18 decimals)
    pub amount: String,
    /// Chain id, e.g. 8453 for Base
    pub chain: u64,
    /// Destination chain id; must equal the source chain
    #[arg(long)]
    pub dest_chain: Option<u64>,
    /// Request a sponsored (gasless) swap
    #[arg(long)]
    pub gasless: bool,
    /// Do not check or set the token allowance
    #[arg(long)]
    pub skip_approval: bool,
}

impl CommandHandler for SwapArgs {
    async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let request = SwapRequest {
            wallet_id: ctx.wallet_id.clone(),
            sell_token: self.sell_token,
            buy_token: self.buy_token,
            amount: self.amount,
            chain_id: self.chain,
            dest_chain_id: self.dest_chain,
            gasless: self.gasless,
            skip_approval: self.skip_approval,
        };

        let interactor = ctx.services.swap_interactor();
        let view = Arc::new(ConsoleSwapView::new(ctx.format));
        let presenter = SwapPresenterImpl::new(interactor, view);
        presenter.process_swap(request).await
    }
}
