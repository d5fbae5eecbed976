use crate::entity::PreparedTransaction;
use serde::Serialize;

/// Priced swap returned by the venue. Amounts are integer strings in the token's smallest unit.
#[derive(Debug, Clone)]
pub struct Quote {
    pub quote_id: Option<String>,
    pub sell_amount: String,
    pub buy_amount: Option<String>,
    pub transaction: PreparedTransaction,
    pub settlement_address: Option<String>,
    pub approval_target: Option<String>,
}

impl Quote {
    /// True unless the venue names an approval target other than `spender`
    pub fn approval_target_matches(&self, spender: &str) -> bool {
        self.approval_target
            .as_deref()
            .map_or(true, |target| target.eq_ignore_ascii_case(spender))
    }

    /// True unless the venue's settlement address differs from the transaction destination
    pub fn settles_through_transaction_target(&self) -> bool {
        self.settlement_address
            .as_deref()
            .map_or(true, |settlement| settlement.eq_ignore_ascii_case(&self.transaction.to))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub sell_amount: String,
    pub buy_amount: Option<String>,
}

impl From<&Quote> for QuoteSummary {
    fn from(quote: &Quote) -> Self {
        Self {
            sell_amount: quote.sell_amount.clone(),
            buy_amount: quote.buy_amount.clone(),
        }
    }
}
