pub mod abi;
pub mod address;
pub mod chains;
pub mod rpc;
pub mod units;

// Re-export commonly used items
pub use address::{is_native_token, is_valid_address, parse_address, NATIVE_TOKEN_ADDRESS};
pub use chains::{caip2, chain_info, ChainInfo, SUPPORTED_CHAINS};
pub use rpc::{ChainReader, JsonRpcChainReader};
pub use units::{parse_amount, to_smallest_unit, DEFAULT_TOKEN_DECIMALS};
