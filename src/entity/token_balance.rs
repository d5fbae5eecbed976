use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBalance {
    pub chain: String,
    pub asset: String,
    pub raw_value: String,
    pub raw_value_decimals: u32,
    /// Human-readable values keyed by unit, e.g. `eth` and `usd`
    #[serde(default)]
    pub display_values: HashMap<String, String>,
}

impl TokenBalance {
    pub fn display_amount(&self) -> Option<&str> {
        self.display_values.get(&self.asset).map(String::as_str)
    }

    pub fn usd_value(&self) -> Option<&str> {
        self.display_values.get("usd").map(String::as_str)
    }
}
