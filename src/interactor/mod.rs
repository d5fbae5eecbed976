pub mod balance_interactor;
pub mod send_interactor;
pub mod swap_interactor;
pub mod wallet_interactor;
pub mod withdraw_interactor;

pub use balance_interactor::{BalanceInteractor, BalanceInteractorImpl};
pub use send_interactor::{SendInteractor, SendInteractorImpl, SendResult};
pub use swap_interactor::{SwapInteractor, SwapInteractorImpl, SwapStage};
pub use wallet_interactor::{WalletAddress, WalletInteractor, WalletInteractorImpl};
pub use withdraw_interactor::{
    WithdrawInteractor, WithdrawInteractorImpl, WithdrawRequest, WithdrawResult,
};
