use serde::Deserialize;
use std::collections::HashMap;

pub const APPROVAL_TYPE_STANDARD: &str = "Standard";

/// Accepts amounts the venue sends either as JSON strings or as bare integers
pub mod string_or_number {
    use serde::{self, Deserializer};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrNumber;

        impl<'de> serde::de::Visitor<'de> for StringOrNumber {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string containing an integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value.to_string())
            }
        }

        deserializer.deserialize_any(StringOrNumber)
    }

    pub mod option {
        use serde::{Deserialize, Deserializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
        where
            D: Deserializer<'de>,
        {
            #[derive(Deserialize)]
            struct Wrapper(#[serde(deserialize_with = "super::deserialize")] String);

            Option::<Wrapper>::deserialize(deserializer).map(|w| w.map(|Wrapper(v)| v))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BebopTokenAmount {
    #[serde(with = "string_or_number")]
    pub amount: String,
    pub decimals: Option<u32>,
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "string_or_number::option::deserialize")]
    pub minimum_amount: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BebopTx {
    pub to: String,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default, deserialize_with = "string_or_number::option::deserialize")]
    pub value: Option<String>,
    pub from: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BebopQuoteResponse {
    pub quote_id: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub sell_tokens: HashMap<String, BebopTokenAmount>,
    #[serde(default)]
    pub buy_tokens: HashMap<String, BebopTokenAmount>,
    pub settlement_address: Option<String>,
    pub approval_target: Option<String>,
    pub tx: Option<BebopTx>,
}

impl BebopQuoteResponse {
    /// Token maps are keyed by checksummed addresses, so match case-insensitively
    pub fn sell_amount_for(&self, token: &str) -> Option<&BebopTokenAmount> {
        find_token(&self.sell_tokens, token)
    }

    pub fn buy_amount_for(&self, token: &str) -> Option<&BebopTokenAmount> {
        find_token(&self.buy_tokens, token)
    }
}

fn find_token<'a>(
    tokens: &'a HashMap<String, BebopTokenAmount>,
    address: &str,
) -> Option<&'a BebopTokenAmount> {
    tokens
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(address))
        .map(|(_, amount)| amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_quote_with_mixed_amount_types() {
        let body = json!({
            "quoteId": "q-1",
            "status": "QUOTE_SUCCESS",
            "sellTokens": {
                "0x4200000000000000000000000000000000000006": { "amount": "1000000000000000000", "decimals": 18, "symbol": "WETH" }
            },
            "buyTokens": {
                "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913": { "amount": 2500120000u64, "decimals": 6, "minimumAmount": "2490000000" }
            },
            "settlementAddress": "0xbbbbbBB520d69a9775E85b458C58c648259FAD5F",
            "approvalTarget": "0xbbbbbBB520d69a9775E85b458C58c648259FAD5F",
            "tx": { "to": "0xbbbbbBB520d69a9775E85b458C58c648259FAD5F", "data": "0x4dcebcba", "value": "0x0" }
        });

        let quote: BebopQuoteResponse = serde_json::from_value(body).unwrap();
        assert_eq!(
            quote
                .buy_amount_for("0x833589fcd6edb6e08f4c7c32d4f71b54bda02913")
                .unwrap()
                .amount,
            "2500120000"
        );
        assert_eq!(
            quote
                .sell_amount_for("0x4200000000000000000000000000000000000006")
                .unwrap()
                .symbol
                .as_deref(),
            Some("WETH")
        );
        assert_eq!(quote.tx.unwrap().value.as_deref(), Some("0x0"));
    }

    #[test]
    fn tx_value_may_be_numeric_or_missing() {
        let tx: BebopTx = serde_json::from_value(json!({ "to": "0x01", "value": 5 })).unwrap();
        assert_eq!(tx.value.as_deref(), Some("5"));

        let tx: BebopTx = serde_json::from_value(json!({ "to": "0x01" })).unwrap();
        assert!(tx.value.is_none());
        assert!(tx.data.is_none());
    }
}
