use crate::entity::WalletError;
use rust_decimal::Decimal;

/// Decimal count assumed for swap sell amounts. The token's real decimals are never looked up.
pub const DEFAULT_TOKEN_DECIMALS: u32 = 18;
pub const NATIVE_DECIMALS: u32 = 18;

/// Parse a positive human amount
pub fn parse_amount(amount: &str) -> Result<Decimal, WalletError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(WalletError::validation("amount is required"));
    }

    // Exact parsing: anything past 28 fractional digits is an error, not a rounding
    let value = Decimal::from_str_exact(amount)
        .map_err(|_| WalletError::validation(format!("Invalid amount format: {}", amount)))?
        .normalize();

    if value.is_sign_negative() || value.is_zero() {
        return Err(WalletError::validation("Amount must be greater than zero"));
    }

    Ok(value)
}

/// Convert a human amount such as "1.5" into the integer smallest unit.
pub fn to_smallest_unit(amount: &str, decimals: u32) -> Result<u128, WalletError> {
    let value = parse_amount(amount)?;

    let scale = value.scale();
    if scale > decimals {
        return Err(WalletError::validation(format!(
            "Amount {} has more than {} fractional digits",
            value, decimals
        )));
    }

    let mantissa = value.mantissa() as u128;
    10u128
        .checked_pow(decimals - scale)
        .and_then(|factor| mantissa.checked_mul(factor))
        .ok_or_else(|| WalletError::validation(format!("Amount {} is too large", value)))
}

/// Render an integer amount back into human units, falling back to the raw integer
/// when it cannot be represented.
pub fn format_units(raw: u128, decimals: u32) -> String {
    i128::try_from(raw)
        .ok()
        .and_then(|raw| Decimal::try_from_i128_with_scale(raw, decimals).ok())
        .map(|value| value.normalize().to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Parse a JSON-RPC style quantity: `0x`-prefixed hex or a plain decimal integer.
pub fn parse_quantity(value: &str) -> Result<u128, WalletError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }

    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some("") => Ok(0),
        Some(hex) => u128::from_str_radix(hex, 16),
        None => value.parse::<u128>(),
    };

    parsed.map_err(|_| WalletError::validation(format!("Invalid quantity: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_with_eighteen_decimals() {
        assert_eq!(
            to_smallest_unit("1.5", DEFAULT_TOKEN_DECIMALS).unwrap(),
            1_500_000_000_000_000_000
        );
        assert_eq!(
            to_smallest_unit("1", DEFAULT_TOKEN_DECIMALS).unwrap(),
            1_000_000_000_000_000_000
        );
        assert_eq!(
            to_smallest_unit("0.000000000000000001", DEFAULT_TOKEN_DECIMALS).unwrap(),
            1
        );
    }

    #[test]
    fn trailing_zeros_do_not_count_as_precision() {
        assert_eq!(
            to_smallest_unit("2.500000000000000000000", 18).unwrap(),
            2_500_000_000_000_000_000
        );
    }

    #[test]
    fn honours_explicit_decimals() {
        assert_eq!(to_smallest_unit("12.34", 6).unwrap(), 12_340_000);
        assert!(to_smallest_unit("0.0000001", 6).is_err());
    }

    #[test]
    fn rejects_bad_amounts() {
        for bad in [
            "",
            "abc",
            "-1",
            "0",
            "0.0",
            "1,5",
            "0x10",
            "1.0000000000000000001",
            "1.00000000000000000000000000001",
        ] {
            match to_smallest_unit(bad, 18) {
                Err(WalletError::Validation(_)) => {}
                other => panic!("{:?} should be rejected, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn formats_back_to_human_units() {
        assert_eq!(format_units(1_500_000_000_000_000_000, 18), "1.5");
        assert_eq!(format_units(1_000_000, 6), "1");
        assert_eq!(format_units(0, 18), "0");
    }

    #[test]
    fn parses_quantities() {
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_quantity("0x").unwrap(), 0);
        assert_eq!(parse_quantity("").unwrap(), 0);
        assert_eq!(parse_quantity("0xde0b6b3a7640000").unwrap(), 1_000_000_000_000_000_000);
        assert_eq!(parse_quantity("42").unwrap(), 42);
        assert!(parse_quantity("0xzz").is_err());
        assert!(parse_quantity("1.5").is_err());
    }
}
