use serde::{Deserialize, Serialize};

/// An unsigned transaction ready to be handed to the custody service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedTransaction {
    pub to: String,
    pub data: String,
    /// Value in wei
    pub value: u128,
}

impl PreparedTransaction {
    pub fn new(to: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            data: data.into(),
            value: 0,
        }
    }

    pub fn with_value(mut self, value: u128) -> Self {
        self.value = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
    pub hash: String,
    /// CAIP-2 chain reference echoed by the custody service
    pub caip2: String,
}
