//! Session standings: who won, who lost, and whether the books balance.

use potsplit_types::{NetPosition, PlayerBalance, Standing};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::conservation::{is_balanced, session_totals};

/// Standings for one session, in the order they are usually shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Net winners, largest gain first.
    pub winners: Vec<NetPosition>,
    /// Net losers, largest loss first.
    pub losers: Vec<NetPosition>,
    /// Names of players who broke even.
    pub break_even: Vec<String>,
    pub total_buy_in: Decimal,
    pub total_cash_out: Decimal,
}

impl SessionSummary {
    /// `total_cash_out - total_buy_in`. Zero for a balanced session.
    #[must_use]
    pub fn imbalance(&self) -> Decimal {
        self.total_cash_out.saturating_sub(self.total_buy_in)
    }

    #[must_use]
    pub fn is_balanced(&self, tolerance: Decimal) -> bool {
        is_balanced(self.imbalance(), tolerance)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.winners.len() + self.losers.len() + self.break_even.len()
    }
}

/// Build the standings for a list of players.
#[must_use]
pub fn summarize(players: &[PlayerBalance]) -> SessionSummary {
    let mut winners = Vec::new();
    let mut losers = Vec::new();
    let mut break_even = Vec::new();

    for position in players.iter().map(PlayerBalance::net_position) {
        match position.standing() {
            Standing::Winner => winners.push(position),
            Standing::Loser => losers.push(position),
            Standing::BreakEven => break_even.push(position.name),
        }
    }

    winners.sort_by(|a, b| b.net_result.cmp(&a.net_result));
    losers.sort_by(|a, b| a.net_result.cmp(&b.net_result));

    let (total_buy_in, total_cash_out) = session_totals(players);

    SessionSummary {
        winners,
        losers,
        break_even,
        total_buy_in,
        total_cash_out,
    }
}
