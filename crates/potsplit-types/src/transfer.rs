//! Settlement transfer type produced by the settlement engine.
//!
//! A [`SettlementTransfer`] is a directed payment obligation from one net
//! loser to one net winner.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One payment from a loser to a winner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettlementTransfer {
    /// Paying player (net loser).
    #[serde(alias = "from_player")]
    pub from: String,
    /// Receiving player (net winner).
    #[serde(alias = "to_player")]
    pub to: String,
    /// Always positive, rounded to the engine's amount scale.
    pub amount: Decimal,
}

impl SettlementTransfer {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: Decimal) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }

    /// Whether `name` is on either side of this transfer.
    #[must_use]
    pub fn involves(&self, name: &str) -> bool {
        self.from == name || self.to == name
    }
}

impl fmt::Display for SettlementTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}
