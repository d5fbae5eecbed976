use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use super::{CommandContext, CommandHandler};
use crate::presenter::send_presenter::{SendPresenter, SendPresenterImpl};
use crate::view::send_view::ConsoleSendView;

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Destination address
    pub to: String,
    /// Call data as 0x-prefixed hex
    #[arg(long, default_value = "0x")]
    pub data: String,
    /// Value in wei, decimal or 0x-prefixed hex
    #[arg(long, default_value = "0")]
    pub value: String,
    /// Chain id
    #[arg(long, default_value_t = 8453)]
    pub chain: u64,
    /// Ask the custody service to sponsor gas
    #[arg(long)]
    pub sponsor: bool,
}

impl CommandHandler for SendArgs {
    async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let interactor = ctx.services.send_interactor();
        let view = Arc::new(ConsoleSendView::new(ctx.format));
        let presenter = SendPresenterImpl::new(interactor, view);
        presenter
            .process_send(
                &ctx.wallet_id,
                self.chain,
                &self.to,
                &self.data,
                &self.value,
                self.sponsor,
            )
            .await
    }
}
