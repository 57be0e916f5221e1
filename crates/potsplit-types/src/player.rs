//! Player balance types.
//!
//! A [`PlayerBalance`] is built fresh from session state each time a
//! settlement is requested. Its derived net result (`cash_out - buy_in`)
//! decides whether the player pays, receives, or sits out.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a player's figures were entered at the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryMode {
    /// Buy-in and cash-out entered separately.
    #[default]
    #[serde(rename = "buyin-cashout")]
    BuyInCashOut,
    /// Only the profit/loss was entered.
    #[serde(rename = "pnl")]
    Pnl,
}

impl fmt::Display for EntryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuyInCashOut => write!(f, "buyin-cashout"),
            Self::Pnl => write!(f, "pnl"),
        }
    }
}

/// One player's money in and money out for a session.
///
/// `name` identifies the player within one settlement computation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBalance {
    pub name: String,
    /// Total contributed to the table.
    #[serde(alias = "buyIn")]
    pub buy_in: Decimal,
    /// Total taken off the table.
    #[serde(alias = "cashOut")]
    pub cash_out: Decimal,
    #[serde(default, alias = "entryMode")]
    pub entry_mode: EntryMode,
}

impl PlayerBalance {
    #[must_use]
    pub fn new(name: impl Into<String>, buy_in: Decimal, cash_out: Decimal) -> Self {
        Self {
            name: name.into(),
            buy_in,
            cash_out,
            entry_mode: EntryMode::BuyInCashOut,
        }
    }

    /// Build a player from a single profit/loss figure.
    ///
    /// A gain is recorded as a cash-out with zero buy-in, a loss as a
    /// buy-in with zero cash-out, so `net_result() == pnl` either way.
    #[must_use]
    pub fn from_pnl(name: impl Into<String>, pnl: Decimal) -> Self {
        let (buy_in, cash_out) = if pnl < Decimal::ZERO {
            (pnl.abs(), Decimal::ZERO)
        } else {
            (Decimal::ZERO, pnl)
        };
        Self {
            name: name.into(),
            buy_in,
            cash_out,
            entry_mode: EntryMode::Pnl,
        }
    }

    /// `cash_out - buy_in`, saturating at the `Decimal` bounds.
    #[must_use]
    pub fn net_result(&self) -> Decimal {
        self.cash_out.checked_sub(self.buy_in).unwrap_or_else(|| {
            if self.cash_out > self.buy_in {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
    }

    #[must_use]
    pub fn net_position(&self) -> NetPosition {
        NetPosition {
            name: self.name.clone(),
            net_result: self.net_result(),
        }
    }
}

/// Which side of the settlement a player lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standing {
    Winner,
    Loser,
    BreakEven,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner => write!(f, "WINNER"),
            Self::Loser => write!(f, "LOSER"),
            Self::BreakEven => write!(f, "BREAK_EVEN"),
        }
    }
}

/// A player's name paired with their derived net result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPosition {
    pub name: String,
    pub net_result: Decimal,
}

impl NetPosition {
    #[must_use]
    pub fn standing(&self) -> Standing {
        if self.net_result > Decimal::ZERO {
            Standing::Winner
        } else if self.net_result < Decimal::ZERO {
            Standing::Loser
        } else {
            Standing::BreakEven
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_result_winner_and_loser() {
        let a = PlayerBalance::new("A", Decimal::new(100, 0), Decimal::new(150, 0));
        let b = PlayerBalance::new("B", Decimal::new(100, 0), Decimal::new(50, 0));
        assert_eq!(a.net_result(), Decimal::new(50, 0));
        assert_eq!(b.net_result(), Decimal::new(-50, 0));
        assert_eq!(a.net_position().standing(), Standing::Winner);
        assert_eq!(b.net_position().standing(), Standing::Loser);
    }

    #[test]
    fn break_even_standing() {
        let p = PlayerBalance::new("C", Decimal::new(100, 0), Decimal::new(100, 0));
        assert!(p.net_result().is_zero());
        assert_eq!(p.net_position().standing(), Standing::BreakEven);
    }

    #[test]
    fn from_pnl_splits_sign() {
        let gain = PlayerBalance::from_pnl("W", Decimal::new(4250, 2));
        assert_eq!(gain.buy_in, Decimal::ZERO);
        assert_eq!(gain.cash_out, Decimal::new(4250, 2));
        assert_eq!(gain.entry_mode, EntryMode::Pnl);

        let loss = PlayerBalance::from_pnl("L", Decimal::new(-30, 0));
        assert_eq!(loss.buy_in, Decimal::new(30, 0));
        assert_eq!(loss.cash_out, Decimal::ZERO);
        assert_eq!(loss.net_result(), Decimal::new(-30, 0));
    }

    #[test]
    fn net_result_saturates_instead_of_panicking() {
        let p = PlayerBalance::new("X", Decimal::MIN, Decimal::MAX);
        assert_eq!(p.net_result(), Decimal::MAX);
        let q = PlayerBalance::new("Y", Decimal::MAX, Decimal::MIN);
        assert_eq!(q.net_result(), Decimal::MIN);
    }

    #[test]
    fn deserializes_frontend_field_names() {
        let json = r#"{"name":"A","buyIn":"100","cashOut":"150","entryMode":"pnl"}"#;
        let p: PlayerBalance = serde_json::from_str(json).unwrap();
        assert_eq!(p.buy_in, Decimal::new(100, 0));
        assert_eq!(p.cash_out, Decimal::new(150, 0));
        assert_eq!(p.entry_mode, EntryMode::Pnl);
    }

    #[test]
    fn entry_mode_defaults_when_missing() {
        let json = r#"{"name":"A","buy_in":"10","cash_out":"0"}"#;
        let p: PlayerBalance = serde_json::from_str(json).unwrap();
        assert_eq!(p.entry_mode, EntryMode::BuyInCashOut);
        assert_eq!(format!("{}", p.entry_mode), "buyin-cashout");
    }
}
