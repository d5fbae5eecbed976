use crate::entity::WalletError;
use lazy_static::lazy_static;
use regex::Regex;

/// Sentinel address the swap venue uses for the chain's native token
pub const NATIVE_TOKEN_ADDRESS: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

lazy_static! {
    static ref ADDRESS_RE: Regex = Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap();
    static ref HEX_DATA_RE: Regex = Regex::new(r"^0x([0-9a-fA-F]{2})*$").unwrap();
}

// Checks shape only; mixed-case checksums are not verified
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

pub fn parse_address(address: &str, field: &str) -> Result<String, WalletError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(WalletError::validation(format!("{} is required", field)));
    }
    if !is_valid_address(address) {
        return Err(WalletError::validation(format!(
            "Invalid {}: {}",
            field, address
        )));
    }
    Ok(address.to_string())
}

pub fn is_native_token(address: &str) -> bool {
    address.eq_ignore_ascii_case(NATIVE_TOKEN_ADDRESS)
}

pub fn is_hex_data(data: &str) -> bool {
    HEX_DATA_RE.is_match(data)
}

pub fn same_address(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WETH_BASE: &str = "0x4200000000000000000000000000000000000006";

    #[test]
    fn accepts_well_formed_addresses() {
        assert!(is_valid_address(WETH_BASE));
        assert!(is_valid_address("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"));
        assert!(is_valid_address(NATIVE_TOKEN_ADDRESS));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "0x",
            "4200000000000000000000000000000000000006",
            "0x420000000000000000000000000000000000000",
            "0x42000000000000000000000000000000000000066",
            "0X4200000000000000000000000000000000000006",
            "0x420000000000000000000000000000000000000g",
            "So11111111111111111111111111111111111111112",
        ] {
            assert!(!is_valid_address(bad), "{} should be rejected", bad);
        }
    }

    #[test]
    fn parse_address_reports_field() {
        let err = parse_address("0x1234", "sell token").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Invalid sell token: 0x1234");

        let err = parse_address("  ", "buy token").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: buy token is required");
    }

    #[test]
    fn native_sentinel_is_case_insensitive() {
        assert!(is_native_token("0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee"));
        assert!(!is_native_token(WETH_BASE));
    }

    #[test]
    fn hex_data() {
        assert!(is_hex_data("0x"));
        assert!(is_hex_data("0xa9059cbb"));
        assert!(!is_hex_data("0xabc"));
        assert!(!is_hex_data("a9059cbb"));
    }
}
