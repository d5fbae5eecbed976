use crate::interactor::wallet_interactor::WalletInteractor;
use crate::view::wallet_view::WalletView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait WalletPresenter: Send + Sync {
    async fn show_address(&self, wallet_id: &str, chain_id: u64) -> Result<()>;
}

pub struct WalletPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> WalletPresenterImpl<I, V>
where
    I: WalletInteractor,
    V: WalletView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> WalletPresenter for WalletPresenterImpl<I, V>
where
    I: WalletInteractor + Send + Sync,
    V: WalletView + Send + Sync,
{
    async fn show_address(&self, wallet_id: &str, chain_id: u64) -> Result<()> {
        let wallet = self
            .interactor
            .get_wallet_address(wallet_id, chain_id)
            .await?;
        self.view.display_address(&wallet).await
    }
}
