use crate::entity::WalletError;
use crate::evm::{abi, chains};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Read-only access to token state on chain
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Current ERC-20 allowance granted by `owner` to `spender`
    async fn allowance(
        &self,
        chain_id: u64,
        token: &str,
        owner: &str,
        spender: &str,
    ) -> Result<u128, WalletError>;

    /// ERC-20 `decimals()`
    async fn decimals(&self, chain_id: u64, token: &str) -> Result<u32, WalletError>;
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// `eth_call` against public JSON-RPC nodes
pub struct JsonRpcChainReader {
    http_client: Client,
    /// Replaces the per-chain registry URL when set
    rpc_url_override: Option<String>,
}

impl JsonRpcChainReader {
    pub fn new(http_client: Client, rpc_url_override: Option<String>) -> Self {
        Self {
            http_client,
            rpc_url_override,
        }
    }

    fn rpc_url(&self, chain_id: u64) -> Result<String, WalletError> {
        match &self.rpc_url_override {
            Some(url) => Ok(url.clone()),
            None => Ok(chains::chain_info(chain_id)?.rpc_url.to_string()),
        }
    }

    async fn eth_call(&self, chain_id: u64, to: &str, data: &str) -> Result<String, WalletError> {
        let url = self.rpc_url(chain_id)?;
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "eth_call",
            params: json!([{ "to": to, "data": data }, "latest"]),
        };

        debug!("eth_call on chain {} to {} data {}", chain_id, to, data);

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("JSON-RPC request to {} failed: {}", url, e);
                WalletError::ChainRead(format!("HTTP request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(WalletError::ChainRead(format!(
                "RPC node returned {}: {}",
                status, error_text
            )));
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| WalletError::ChainRead(format!("Failed to parse RPC response: {}", e)))?;

        if let Some(err) = body.error {
            return Err(WalletError::ChainRead(format!(
                "RPC error {}: {}",
                err.code, err.message
            )));
        }

        body.result
            .ok_or_else(|| WalletError::ChainRead("RPC response has no result".to_string()))
    }
}

#[async_trait]
impl ChainReader for JsonRpcChainReader {
    async fn allowance(
        &self,
        chain_id: u64,
        token: &str,
        owner: &str,
        spender: &str,
    ) -> Result<u128, WalletError> {
        let result = self
            .eth_call(chain_id, token, &abi::encode_allowance(owner, spender))
            .await?;
        abi::decode_uint_saturating(&result)
    }

    async fn decimals(&self, chain_id: u64, token: &str) -> Result<u32, WalletError> {
        let result = self
            .eth_call(chain_id, token, &abi::encode_decimals())
            .await?;
        let decimals = abi::decode_uint_saturating(&result)?;
        u32::try_from(decimals)
            .ok()
            .filter(|d| *d <= 36)
            .ok_or_else(|| WalletError::ChainRead(format!("Implausible decimals: {}", decimals)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_registry() {
        let reader = JsonRpcChainReader::new(Client::new(), Some("http://localhost:8545".into()));
        assert_eq!(reader.rpc_url(8453).unwrap(), "http://localhost:8545");
    }

    #[test]
    fn registry_url_for_known_chain() {
        let reader = JsonRpcChainReader::new(Client::new(), None);
        assert_eq!(reader.rpc_url(8453).unwrap(), "https://mainnet.base.org");
        assert!(matches!(
            reader.rpc_url(5),
            Err(WalletError::UnsupportedChain(5))
        ));
    }

    #[test]
    fn rpc_error_body_parses() {
        let body: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"execution reverted"}}"#,
        )
        .unwrap();
        assert!(body.result.is_none());
        assert_eq!(body.error.unwrap().message, "execution reverted");
    }
}
