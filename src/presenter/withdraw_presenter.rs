use crate::interactor::withdraw_interactor::{WithdrawInteractor, WithdrawRequest};
use crate::view::withdraw_view::WithdrawView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait WithdrawPresenter: Send + Sync {
    async fn process_withdraw(&self, request: WithdrawRequest) -> Result<()>;
}

pub struct WithdrawPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> WithdrawPresenterImpl<I, V>
where
    I: WithdrawInteractor,
    V: WithdrawView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> WithdrawPresenter for WithdrawPresenterImpl<I, V>
where
    I: WithdrawInteractor + Send + Sync,
    V: WithdrawView + Send + Sync,
{
    async fn process_withdraw(&self, request: WithdrawRequest) -> Result<()> {
        let result = self.interactor.execute_withdraw(&request).await?;
        self.view.display_withdraw_success(&result).await
    }
}
