//! The settled result for one game session.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{SessionId, SettlementTransfer};

/// Where a transfer list was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettlementSource {
    /// Computed in-process.
    Local,
    /// Returned by the persistence backend.
    Backend,
    /// Computed in-process because the backend could not be reached.
    LocalFallback,
}

impl fmt::Display for SettlementSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "LOCAL"),
            Self::Backend => write!(f, "BACKEND"),
            Self::LocalFallback => write!(f, "LOCAL_FALLBACK"),
        }
    }
}

/// Output of settling one session.
///
/// `input_hash` commits to the ordered player list that was settled and
/// `settlement_root` to the ordered transfers, so two parties that settled
/// the same session can compare results without exchanging them in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementBundle {
    pub session_id: SessionId,
    pub transfers: Vec<SettlementTransfer>,
    /// SHA-256 over the ordered transfers.
    pub settlement_root: [u8; 32],
    /// SHA-256 over the ordered input players.
    pub input_hash: [u8; 32],
    pub source: SettlementSource,
    pub computed_at: DateTime<Utc>,
}

impl SettlementBundle {
    /// Sum of all transfer amounts.
    #[must_use]
    pub fn total_transferred(&self) -> Decimal {
        self.transfers.iter().map(|t| t.amount).sum()
    }

    /// True when nobody owes anybody anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Transfers paid by `name`.
    pub fn payments_from<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a SettlementTransfer> + 'a {
        self.transfers.iter().filter(move |t| t.from == name)
    }

    /// Transfers received by `name`.
    pub fn payments_to<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a SettlementTransfer> + 'a {
        self.transfers.iter().filter(move |t| t.to == name)
    }
}
