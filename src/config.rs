use crate::bebop::DEFAULT_BEBOP_API_URL;
use crate::privy::DEFAULT_PRIVY_API_URL;
use crate::services::DEFAULT_APPROVAL_DELAY;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration, read from the process environment (and `.env`)
#[derive(Clone, Deserialize)]
pub struct AppConfig {
    pub privy_app_id: String,
    pub privy_app_secret: String,
    pub privy_api_url: String,
    pub bebop_api_url: String,
    /// Fixed pause after an approval is broadcast
    pub approval_delay_secs: u64,
    /// Per-request timeout for every outbound HTTP call
    pub http_timeout_secs: u64,
    /// Overrides the per-chain public RPC endpoint
    pub rpc_url: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let cfg = config::Config::builder()
            .set_default("privy_api_url", DEFAULT_PRIVY_API_URL)?
            .set_default("bebop_api_url", DEFAULT_BEBOP_API_URL)?
            .set_default(
                "approval_delay_secs",
                DEFAULT_APPROVAL_DELAY.as_secs() as i64,
            )?
            .set_default("http_timeout_secs", 30_i64)?
            .add_source(config::Environment::default().try_parsing(true))
            .build()
            .context("Failed to read configuration from environment")?;

        let app_config: Self = cfg
            .try_deserialize()
            .context("PRIVY_APP_ID and PRIVY_APP_SECRET must be set in environment variables")?;

        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<()> {
        if self.privy_app_id.trim().is_empty() || self.privy_app_secret.trim().is_empty() {
            anyhow::bail!("PRIVY_APP_ID and PRIVY_APP_SECRET must not be empty");
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }

    pub fn approval_delay(&self) -> Duration {
        Duration::from_secs(self.approval_delay_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
