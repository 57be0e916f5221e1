//! Caller-side preconditions.
//!
//! The engine accepts anything; these checks are what the surrounding
//! application enforces before asking for a settlement.

use potsplit_types::{LedgerError, PlayerBalance, Result, SettlementConfig};
use rust_decimal::Decimal;

/// Reject inputs the application should never settle.
///
/// # Errors
/// - `TooFewPlayers` if fewer than `config.min_players`
/// - `EmptyPlayerName` for a blank name
/// - `NegativeAmount` for a negative buy-in or cash-out
pub fn validate_players(players: &[PlayerBalance], config: &SettlementConfig) -> Result<()> {
    if players.len() < config.min_players {
        return Err(LedgerError::TooFewPlayers {
            required: config.min_players,
            actual: players.len(),
        });
    }

    for (index, player) in players.iter().enumerate() {
        if player.name.trim().is_empty() {
            return Err(LedgerError::EmptyPlayerName { index });
        }
        if player.buy_in < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount {
                name: player.name.clone(),
                field: "buy_in",
                amount: player.buy_in,
            });
        }
        if player.cash_out < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount {
                name: player.name.clone(),
                field: "cash_out",
                amount: player.cash_out,
            });
        }
    }

    Ok(())
}
