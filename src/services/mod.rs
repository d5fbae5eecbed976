pub mod address_resolver;
pub mod approval_service;
pub mod transaction_service;

pub use address_resolver::AddressResolver;
pub use approval_service::{ApprovalRequest, ApprovalService, DEFAULT_APPROVAL_DELAY};
pub use transaction_service::TransactionService;
