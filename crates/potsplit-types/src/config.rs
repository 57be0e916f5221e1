//! Configuration for the settlement layers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LedgerError, Result, constants};

/// Knobs shared by validation, balance checks and the session settler.
///
/// The greedy algorithm itself takes nothing but the amount scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementConfig {
    /// Decimal places kept on emitted transfer amounts.
    pub amount_scale: u32,
    /// Allowed gap between total buy-ins and total cash-outs.
    pub balance_tolerance: Decimal,
    /// Minimum number of players accepted by validation.
    pub min_players: usize,
    /// Refuse to settle unbalanced sessions instead of warning.
    pub require_balanced: bool,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            amount_scale: constants::AMOUNT_SCALE,
            balance_tolerance: constants::DEFAULT_BALANCE_TOLERANCE,
            min_players: constants::DEFAULT_MIN_PLAYERS,
            require_balanced: false,
        }
    }
}

impl SettlementConfig {
    /// Strict variant: unbalanced sessions are rejected.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_balanced: true,
            ..Self::default()
        }
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| LedgerError::Configuration(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount_scale > constants::MAX_AMOUNT_SCALE {
            return Err(LedgerError::Configuration(format!(
                "amount_scale {} exceeds {}",
                self.amount_scale,
                constants::MAX_AMOUNT_SCALE
            )));
        }
        if self.balance_tolerance < Decimal::ZERO {
            return Err(LedgerError::Configuration(format!(
                "balance_tolerance must be non-negative, got {}",
                self.balance_tolerance
            )));
        }
        if self.min_players == 0 {
            return Err(LedgerError::Configuration(
                "min_players must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
