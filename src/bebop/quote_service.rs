use crate::bebop::models::{BebopQuoteResponse, APPROVAL_TYPE_STANDARD};
use crate::entity::{PreparedTransaction, Quote, WalletError};
use crate::evm::{chains, units};
use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_BEBOP_API_URL: &str = "https://api.bebop.xyz/pmm";

/// Parameters for a single quote request
#[derive(Debug, Clone)]
pub struct QuoteParams {
    pub taker_address: String,
    pub sell_token: String,
    pub buy_token: String,
    /// Human units; converted with the 18-decimal assumption
    pub sell_amount: String,
    pub chain_id: u64,
    pub gasless: bool,
}

impl QuoteParams {
    /// Sell amount in smallest units, assuming 18 decimals regardless of the token
    pub fn sell_amount_base_units(&self) -> Result<u128, WalletError> {
        units::to_smallest_unit(&self.sell_amount, units::DEFAULT_TOKEN_DECIMALS)
    }

    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>, WalletError> {
        Ok(vec![
            ("buy_tokens", self.buy_token.clone()),
            ("sell_tokens", self.sell_token.clone()),
            ("sell_amounts", self.sell_amount_base_units()?.to_string()),
            ("taker_address", self.taker_address.clone()),
            ("gasless", self.gasless.to_string()),
            ("approval_type", APPROVAL_TYPE_STANDARD.to_string()),
        ])
    }
}

/// Swap venue that prices a trade and prepares its settlement transaction
#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn get_quote(&self, params: &QuoteParams) -> Result<Quote, WalletError>;
}

pub struct BebopQuoteService {
    http_client: Client,
    base_url: String,
}

impl BebopQuoteService {
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn quote_url(&self, chain_id: u64) -> Result<String, WalletError> {
        let network = chains::venue_network(chain_id)?;
        Ok(format!("{}/{}/v3/quote", self.base_url, network))
    }
}

/// Surface `{"error": ...}` payloads, whether the venue sends a string or an object
fn check_for_api_error(value: &Value) -> Result<(), WalletError> {
    match value.get("error") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(message)) => Err(WalletError::Quote(message.clone())),
        Some(err) => {
            let message = err
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string());
            match err.get("errorCode") {
                Some(code) => Err(WalletError::Quote(format!("{} (code {})", message, code))),
                None => Err(WalletError::Quote(message)),
            }
        }
    }
}

/// Turn a venue response body into a [`Quote`]
pub fn parse_quote_response(value: Value, params: &QuoteParams) -> Result<Quote, WalletError> {
    check_for_api_error(&value)?;

    let response: BebopQuoteResponse = serde_json::from_value(value)
        .map_err(|e| WalletError::Quote(format!("Failed to parse quote response: {}", e)))?;

    let tx = response.tx.as_ref().ok_or_else(|| {
        WalletError::Quote("Quote did not include a settlement transaction".to_string())
    })?;

    let value = match &tx.value {
        Some(raw) => units::parse_quantity(raw)
            .map_err(|_| WalletError::Quote(format!("Invalid transaction value: {}", raw)))?,
        None => 0,
    };

    let transaction = PreparedTransaction::new(
        tx.to.clone(),
        tx.data.clone().unwrap_or_else(|| "0x".to_string()),
    )
    .with_value(value);

    let sell_amount = match response.sell_amount_for(&params.sell_token) {
        Some(token) => token.amount.clone(),
        None => params.sell_amount_base_units()?.to_string(),
    };
    let buy_amount = response
        .buy_amount_for(&params.buy_token)
        .map(|token| token.amount.clone());

    Ok(Quote {
        quote_id: response.quote_id,
        sell_amount,
        buy_amount,
        transaction,
        settlement_address: response.settlement_address,
        approval_target: response.approval_target,
    })
}

#[async_trait]
impl QuoteService for BebopQuoteService {
    async fn get_quote(&self, params: &QuoteParams) -> Result<Quote, WalletError> {
        // Both fail before anything goes over the wire
        let url = self.quote_url(params.chain_id)?;
        let query = params.to_query()?;

        debug!("Requesting quote from {} with parameters: {:?}", url, query);

        let response = self
            .http_client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to get quote from Bebop API: {}", e);
                WalletError::Quote(format!("HTTP request failed: {}", e))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WalletError::Quote(format!("Failed to read quote response: {}", e)))?;

        // Error payloads often arrive with a non-2xx status; prefer their message
        let value: Option<Value> = serde_json::from_str(&body).ok();
        if let Some(value) = &value {
            check_for_api_error(value)?;
        }

        if !status.is_success() {
            error!("Bebop API error [get_quote]: {} {}", status, body);
            return Err(WalletError::Quote(format!("{} {}", status, body)));
        }

        let value = value.ok_or_else(|| {
            WalletError::Quote(format!("Quote response is not valid JSON: {}", body))
        })?;

        let quote = parse_quote_response(value, params)?;

        info!(
            "Quote received successfully: sell_amount={}, buy_amount={}",
            quote.sell_amount,
            quote.buy_amount.as_deref().unwrap_or("unknown")
        );

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const WETH: &str = "0x4200000000000000000000000000000000000006";
    const USDC: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
    const TAKER: &str = "0x1111111111111111111111111111111111111111";

    fn params(amount: &str, chain_id: u64) -> QuoteParams {
        QuoteParams {
            taker_address: TAKER.to_string(),
            sell_token: WETH.to_string(),
            buy_token: USDC.to_string(),
            sell_amount: amount.to_string(),
            chain_id,
            gasless: false,
        }
    }

    #[test]
    fn query_uses_eighteen_decimal_conversion() {
        let query = params("1.5", 8453).to_query().unwrap();
        assert!(query.contains(&("sell_amounts", "1500000000000000000".to_string())));
        assert!(query.contains(&("gasless", "false".to_string())));
        assert!(query.contains(&("approval_type", "Standard".to_string())));
        assert!(query.contains(&("taker_address", TAKER.to_string())));
    }

    #[test]
    fn quote_url_per_chain() {
        let service = BebopQuoteService::new(Client::new(), "https://api.bebop.xyz/pmm/");
        assert_eq!(
            service.quote_url(8453).unwrap(),
            "https://api.bebop.xyz/pmm/base/v3/quote"
        );
        assert_eq!(
            service.quote_url(42161).unwrap(),
            "https://api.bebop.xyz/pmm/arbitrum/v3/quote"
        );
    }

    #[tokio::test]
    async fn unsupported_chain_fails_without_network() {
        // Unroutable base URL: reaching the network would yield a Quote error instead
        let service = BebopQuoteService::new(Client::new(), "http://127.0.0.1:9");
        match service.get_quote(&params("1", 999)).await {
            Err(WalletError::UnsupportedChain(999)) => {}
            other => panic!("expected UnsupportedChain, got {:?}", other),
        }
    }

    #[test]
    fn string_error_payload() {
        let err = parse_quote_response(json!({ "error": "Insufficient liquidity" }), &params("1", 8453))
            .unwrap_err();
        assert_eq!(err.to_string(), "Quote error: Insufficient liquidity");
    }

    #[test]
    fn object_error_payload() {
        let body = json!({ "error": { "errorCode": 102, "message": "Invalid taker" } });
        match parse_quote_response(body, &params("1", 8453)) {
            Err(WalletError::Quote(message)) => assert_eq!(message, "Invalid taker (code 102)"),
            other => panic!("expected Quote error, got {:?}", other),
        }
    }

    #[test]
    fn successful_quote() {
        let body = json!({
            "quoteId": "q-42",
            "sellTokens": { "0x4200000000000000000000000000000000000006": { "amount": "1000000000000000000" } },
            "buyTokens": { "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913": { "amount": "2500120000" } },
            "tx": { "to": "0xbbbbbBB520d69a9775E85b458C58c648259FAD5F", "data": "0xdeadbeef", "value": "0x0" }
        });

        let quote = parse_quote_response(body, &params("1", 8453)).unwrap();
        assert_eq!(quote.quote_id.as_deref(), Some("q-42"));
        assert_eq!(quote.sell_amount, "1000000000000000000");
        assert_eq!(quote.buy_amount.as_deref(), Some("2500120000"));
        assert_eq!(quote.transaction.data, "0xdeadbeef");
        assert_eq!(quote.transaction.value, 0);
    }

    #[test]
    fn missing_amounts_fall_back_to_request() {
        let body = json!({ "tx": { "to": "0xbbbbbBB520d69a9775E85b458C58c648259FAD5F" } });
        let quote = parse_quote_response(body, &params("2", 8453)).unwrap();
        assert_eq!(quote.sell_amount, "2000000000000000000");
        assert!(quote.buy_amount.is_none());
        assert_eq!(quote.transaction.data, "0x");
    }

    #[test]
    fn quote_without_transaction_is_rejected() {
        let body = json!({ "sellTokens": {}, "buyTokens": {} });
        assert!(matches!(
            parse_quote_response(body, &params("1", 8453)),
            Err(WalletError::Quote(_))
        ));
    }
}
