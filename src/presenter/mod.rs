pub mod balance_presenter;
pub mod send_presenter;
pub mod swap_presenter;
pub mod wallet_presenter;
pub mod withdraw_presenter;
