//! Error types for the potsplit settlement engine.
//!
//! All errors use the `PL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Player input errors
//! - 2xx: Session balance errors
//! - 3xx: Settlement errors
//! - 9xx: Serialization / configuration errors
//!
//! The settlement algorithm itself is total and never returns these. They
//! are produced by the caller-side layers: validation, balance and
//! conservation checks, configuration loading.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::SessionId;

/// Central error enum for all potsplit operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // =================================================================
    // Player Input Errors (1xx)
    // =================================================================
    /// Settlement needs at least `required` players.
    #[error("PL_ERR_100: Not enough players: need {required}, got {actual}")]
    TooFewPlayers { required: usize, actual: usize },

    /// A player record has an empty or whitespace-only name.
    #[error("PL_ERR_101: Player at index {index} has an empty name")]
    EmptyPlayerName { index: usize },

    /// A buy-in or cash-out is negative.
    #[error("PL_ERR_102: Negative {field} for player {name}: {amount}")]
    NegativeAmount {
        name: String,
        field: &'static str,
        amount: Decimal,
    },

    // =================================================================
    // Session Balance Errors (2xx)
    // =================================================================
    /// Total buy-ins and total cash-outs differ by more than the tolerance.
    #[error(
        "PL_ERR_200: Unbalanced session: buy-ins {buy_ins}, cash-outs {cash_outs}, difference {difference}"
    )]
    UnbalancedSession {
        buy_ins: Decimal,
        cash_outs: Decimal,
        difference: Decimal,
    },

    // =================================================================
    // Settlement Errors (3xx)
    // =================================================================
    /// Transfers do not zero out a player's net result.
    #[error("PL_ERR_300: Conservation violated: {reason}")]
    ConservationViolation { reason: String },

    /// A transfer names the same player on both sides.
    #[error("PL_ERR_301: Self transfer for player {0}")]
    SelfTransfer(String),

    /// A transfer carries a zero or negative amount.
    #[error("PL_ERR_302: Non-positive transfer amount {amount} from {from} to {to}")]
    NonPositiveAmount {
        from: String,
        to: String,
        amount: Decimal,
    },

    /// A recomputed settlement does not match the recorded one.
    #[error("PL_ERR_303: Determinism violation: expected {expected}, got {actual}")]
    DeterminismViolation { expected: String, actual: String },

    /// A bundle was checked against the wrong session.
    #[error("PL_ERR_304: Session mismatch: expected {expected}, got {actual}")]
    SessionMismatch {
        expected: SessionId,
        actual: SessionId,
    },

    // =================================================================
    // Serialization / Configuration (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("PL_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config, out-of-range values, etc.).
    #[error("PL_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
