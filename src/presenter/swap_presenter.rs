use crate::entity::SwapRequest;
use crate::interactor::swap_interactor::SwapInteractor;
use crate::view::swap_view::SwapView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait SwapPresenter: Send + Sync {
    async fn process_swap(&self, request: SwapRequest) -> Result<()>;
}

pub struct SwapPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> SwapPresenterImpl<I, V>
where
    I: SwapInteractor,
    V: SwapView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> SwapPresenter for SwapPresenterImpl<I, V>
where
    I: SwapInteractor + Send + Sync,
    V: SwapView + Send + Sync,
{
    async fn process_swap(&self, request: SwapRequest) -> Result<()> {
        // Reject bad input before printing anything that suggests work started
        self.interactor.validate_swap_request(&request)?;

        self.view.display_processing(&request).await?;

        let result = self.interactor.execute_swap(&request).await?;

        self.view.display_swap_success(&result).await
    }
}
