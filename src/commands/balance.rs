use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use super::{CommandContext, CommandHandler};
use crate::presenter::balance_presenter::{BalancePresenter, BalancePresenterImpl};
use crate::view::balance_view::ConsoleBalanceView;

#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// Asset to query (repeatable), e.g. eth or usdc
    #[arg(long = "asset", default_values = ["eth", "usdc"])]
    pub assets: Vec<String>,
    /// Chain id to query (repeatable)
    #[arg(long = "chain", default_values_t = [8453])]
    pub chains: Vec<u64>,
}

impl CommandHandler for BalanceArgs {
    async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let interactor = ctx.services.balance_interactor();
        let view = Arc::new(ConsoleBalanceView::new(ctx.format));
        let presenter = BalancePresenterImpl::new(interactor, view);
        presenter
            .show_balances(&ctx.wallet_id, &self.assets, &self.chains)
            .await
    }
}
