//! Hand-rolled call data for the handful of ERC-20 functions the wallet needs.

use crate::entity::WalletError;

const APPROVE_SELECTOR: [u8; 4] = [0x09, 0x5e, 0xa7, 0xb3];
const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];
const ALLOWANCE_SELECTOR: [u8; 4] = [0xdd, 0x62, 0xed, 0x3e];
const DECIMALS_SELECTOR: [u8; 4] = [0x31, 0x3c, 0xe5, 0x67];

const WORD_HEX_LEN: usize = 64;

/// `type(uint256).max` as a single ABI word
pub const MAX_UINT256_WORD: &str = "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

fn encode_address(address: &str) -> String {
    let bare = address.trim_start_matches("0x").to_lowercase();
    format!("{:0>width$}", bare, width = WORD_HEX_LEN)
}

fn encode_uint(value: u128) -> String {
    format!("{:064x}", value)
}

fn call(selector: [u8; 4], words: &[String]) -> String {
    let mut data = format!("0x{}", hex::encode(selector));
    for word in words {
        data.push_str(word);
    }
    data
}

/// `approve(spender, type(uint256).max)`
pub fn encode_approve_max(spender: &str) -> String {
    call(
        APPROVE_SELECTOR,
        &[encode_address(spender), MAX_UINT256_WORD.to_string()],
    )
}

/// `transfer(recipient, amount)`
pub fn encode_transfer(recipient: &str, amount: u128) -> String {
    call(
        TRANSFER_SELECTOR,
        &[encode_address(recipient), encode_uint(amount)],
    )
}

/// `allowance(owner, spender)`
pub fn encode_allowance(owner: &str, spender: &str) -> String {
    call(
        ALLOWANCE_SELECTOR,
        &[encode_address(owner), encode_address(spender)],
    )
}

/// `decimals()`
pub fn encode_decimals() -> String {
    call(DECIMALS_SELECTOR, &[])
}

/// Decode a single uint256 return word, saturating at `u128::MAX`.
///
/// Unlimited approvals come back as `2^256 - 1`, which does not fit a `u128`;
/// saturating keeps "at least this much" comparisons correct.
pub fn decode_uint_saturating(result: &str) -> Result<u128, WalletError> {
    let bytes = hex::decode(result.trim_start_matches("0x"))
        .map_err(|e| WalletError::ChainRead(format!("Invalid hex in call result: {}", e)))?;

    if bytes.len() < 32 {
        return Err(WalletError::ChainRead(format!(
            "Call result too short: {} bytes",
            bytes.len()
        )));
    }

    let word = &bytes[..32];
    if word[..16].iter().any(|b| *b != 0) {
        return Ok(u128::MAX);
    }

    let mut low = [0u8; 16];
    low.copy_from_slice(&word[16..]);
    Ok(u128::from_be_bytes(low))
}
