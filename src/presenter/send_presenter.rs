use crate::interactor::send_interactor::SendInteractor;
use crate::view::send_view::SendView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait SendPresenter: Send + Sync {
    async fn process_send(
        &self,
        wallet_id: &str,
        chain_id: u64,
        to: &str,
        data: &str,
        value: &str,
        sponsor: bool,
    ) -> Result<()>;
}

pub struct SendPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> SendPresenterImpl<I, V>
where
    I: SendInteractor,
    V: SendView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> SendPresenter for SendPresenterImpl<I, V>
where
    I: SendInteractor + Send + Sync,
    V: SendView + Send + Sync,
{
    async fn process_send(
        &self,
        wallet_id: &str,
        chain_id: u64,
        to: &str,
        data: &str,
        value: &str,
        sponsor: bool,
    ) -> Result<()> {
        let transaction = self.interactor.prepare_transaction(to, data, value)?;

        let result = self
            .interactor
            .send_transaction(wallet_id, chain_id, &transaction, sponsor)
            .await?;

        self.view.display_send_success(&result).await
    }
}
