use crate::entity::{PreparedTransaction, TokenBalance, TransactionResult, WalletError};
use crate::privy::models::{
    BalanceResponse, PrivyWallet, RpcParams, RpcTransaction, SendTransactionRequest,
    SendTransactionResponse, ETHEREUM_CHAIN_TYPE, ETH_SEND_TRANSACTION,
};
use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::{Client, RequestBuilder, Response, StatusCode};

pub const DEFAULT_PRIVY_API_URL: &str = "https://api.privy.io";

/// Custody service that holds the wallet keys
#[async_trait]
pub trait CustodyService: Send + Sync {
    /// Look up a wallet by its custody identifier
    async fn get_wallet(&self, wallet_id: &str) -> Result<PrivyWallet, WalletError>;

    /// Sign and broadcast a transaction on the chain identified by `caip2`
    async fn send_transaction(
        &self,
        wallet_id: &str,
        caip2: &str,
        transaction: &PreparedTransaction,
        sponsor: bool,
    ) -> Result<TransactionResult, WalletError>;

    /// Balances for every (asset, chain) pair
    async fn get_balances(
        &self,
        wallet_id: &str,
        assets: &[String],
        chains: &[String],
    ) -> Result<Vec<TokenBalance>, WalletError>;
}

/// Privy server wallet API client
pub struct PrivyClient {
    http_client: Client,
    base_url: String,
    app_id: String,
    app_secret: String,
}

impl PrivyClient {
    pub fn new(http_client: Client, base_url: &str, app_id: &str, app_secret: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: app_id.to_string(),
            app_secret: app_secret.to_string(),
        }
    }

    fn wallet_url(&self, wallet_id: &str, suffix: &str) -> String {
        format!("{}/v1/wallets/{}{}", self.base_url, wallet_id, suffix)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .basic_auth(&self.app_id, Some(&self.app_secret))
            .header("privy-app-id", &self.app_id)
    }

    async fn error_text(response: Response) -> String {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!("{} {}", status, text)
    }
}

#[async_trait]
impl CustodyService for PrivyClient {
    async fn get_wallet(&self, wallet_id: &str) -> Result<PrivyWallet, WalletError> {
        let url = self.wallet_url(wallet_id, "");

        let response = self
            .authorized(self.http_client.get(&url))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to fetch wallet from Privy API: {}", e);
                WalletError::Resolution(format!("HTTP request failed: {}", e))
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(WalletError::Resolution(format!(
                "Wallet {} not found",
                wallet_id
            )));
        }

        if !response.status().is_success() {
            let error_text = Self::error_text(response).await;
            error!("Privy API error [get_wallet]: {}", error_text);
            return Err(WalletError::Resolution(error_text));
        }

        response.json().await.map_err(|e| {
            WalletError::Resolution(format!("Failed to parse wallet response: {}", e))
        })
    }

    async fn send_transaction(
        &self,
        wallet_id: &str,
        caip2: &str,
        transaction: &PreparedTransaction,
        sponsor: bool,
    ) -> Result<TransactionResult, WalletError> {
        let url = self.wallet_url(wallet_id, "/rpc");
        let request = SendTransactionRequest {
            method: ETH_SEND_TRANSACTION,
            caip2: caip2.to_string(),
            chain_type: ETHEREUM_CHAIN_TYPE,
            sponsor: sponsor.then_some(true),
            params: RpcParams {
                transaction: RpcTransaction {
                    to: transaction.to.clone(),
                    data: transaction.data.clone(),
                    value: format!("0x{:x}", transaction.value),
                },
            },
        };

        debug!("Submitting transaction: {:?}", request);

        let response = self
            .authorized(self.http_client.post(&url))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach Privy API: {}", e);
                WalletError::Submission(format!("HTTP request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = Self::error_text(response).await;
            error!("Privy API error [send_transaction]: {}", error_text);
            return Err(WalletError::Submission(error_text));
        }

        let body: SendTransactionResponse = response.json().await.map_err(|e| {
            WalletError::Submission(format!("Failed to parse transaction response: {}", e))
        })?;

        info!("Transaction broadcast: {}", body.data.hash);

        Ok(TransactionResult {
            hash: body.data.hash,
            caip2: body.data.caip2.unwrap_or_else(|| caip2.to_string()),
        })
    }

    async fn get_balances(
        &self,
        wallet_id: &str,
        assets: &[String],
        chains: &[String],
    ) -> Result<Vec<TokenBalance>, WalletError> {
        let url = self.wallet_url(wallet_id, "/balance");
        let query: Vec<(&str, &str)> = assets
            .iter()
            .map(|asset| ("asset", asset.as_str()))
            .chain(chains.iter().map(|chain| ("chain", chain.as_str())))
            .collect();

        let response = self
            .authorized(self.http_client.get(&url))
            .query(&query)
            .send()
            .await
            .map_err(|e| WalletError::Balance(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = Self::error_text(response).await;
            error!("Privy API error [get_balances]: {}", error_text);
            return Err(WalletError::Balance(error_text));
        }

        let body: BalanceResponse = response.json().await.map_err(|e| {
            WalletError::Balance(format!("Failed to parse balance response: {}", e))
        })?;

        Ok(body.balances)
    }
}
