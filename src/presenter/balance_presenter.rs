use crate::interactor::balance_interactor::BalanceInteractor;
use crate::view::balance_view::BalanceView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait BalancePresenter: Send + Sync {
    async fn show_balances(&self, wallet_id: &str, assets: &[String], chain_ids: &[u64])
        -> Result<()>;
}

pub struct BalancePresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> BalancePresenterImpl<I, V>
where
    I: BalanceInteractor,
    V: BalanceView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> BalancePresenter for BalancePresenterImpl<I, V>
where
    I: BalanceInteractor + Send + Sync,
    V: BalanceView + Send + Sync,
{
    async fn show_balances(
        &self,
        wallet_id: &str,
        assets: &[String],
        chain_ids: &[u64],
    ) -> Result<()> {
        let balances = self
            .interactor
            .get_wallet_balances(wallet_id, assets, chain_ids)
            .await?;

        self.view.display_balances(&balances).await
    }
}
