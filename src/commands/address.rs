use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use super::{CommandContext, CommandHandler};
use crate::presenter::wallet_presenter::{WalletPresenter, WalletPresenterImpl};
use crate::view::wallet_view::ConsoleWalletView;

#[derive(Args, Debug)]
pub struct AddressArgs {
    /// Chain id
    #[arg(long, default_value_t = 8453)]
    pub chain: u64,
}

impl CommandHandler for AddressArgs {
    async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let interactor = ctx.services.wallet_interactor();
        let view = Arc::new(ConsoleWalletView::new(ctx.format));
        let presenter = WalletPresenterImpl::new(interactor, view);
        presenter.show_address(&ctx.wallet_id, self.chain).await
    }
}
