//! Greedy settlement engine.
//!
//! The core settlement function: takes player balances and produces the
//! directed transfers that zero out every net result. No side effects, no
//! validation, no I/O.
//!
//! ```text
//! compute_settlements(&[PlayerBalance]) -> Vec<SettlementTransfer>
//! ```
//!
//! The matching is a greedy heuristic: largest debtor against largest
//! creditor first. It usually produces few transfers but is not a
//! minimum-transaction matcher.

use potsplit_types::{PlayerBalance, SettlementTransfer, constants};
use rust_decimal::{Decimal, RoundingStrategy};

/// A player with an outstanding amount still to pay or receive.
#[derive(Debug)]
struct Outstanding<'a> {
    name: &'a str,
    net_result: Decimal,
    remaining: Decimal,
}

/// Settle at the default scale of [`constants::AMOUNT_SCALE`] (cents).
#[must_use]
pub fn compute_settlements(players: &[PlayerBalance]) -> Vec<SettlementTransfer> {
    compute_settlements_at_scale(players, constants::AMOUNT_SCALE)
}

/// Greedy settlement with a configurable emission scale.
///
/// ## Algorithm
///
/// 1. Net result per player (`cash_out - buy_in`)
/// 2. Winners (net > 0) sorted descending, losers (net < 0) sorted
///    ascending; break-even players drop out. Sorts are stable, so equal
///    net results keep their input order.
/// 3. For each loser, walk the winners and settle
///    `min(loser.remaining, winner.remaining)` with every winner that
///    still has something outstanding
/// 4. Round the amount once when the transfer is emitted; the running
///    balances are decremented by the exact amount
///
/// A pair whose rounded amount is zero, or whose two sides carry the same
/// name, still consumes balance but emits nothing.
///
/// Total over any input: unbalanced sessions leave residue on one side,
/// which is silently absorbed.
#[must_use]
pub fn compute_settlements_at_scale(
    players: &[PlayerBalance],
    scale: u32,
) -> Vec<SettlementTransfer> {
    let mut winners: Vec<Outstanding<'_>> = Vec::new();
    let mut losers: Vec<Outstanding<'_>> = Vec::new();

    for player in players {
        let net_result = player.net_result();
        if net_result > Decimal::ZERO {
            winners.push(Outstanding {
                name: &player.name,
                net_result,
                remaining: net_result,
            });
        } else if net_result < Decimal::ZERO {
            losers.push(Outstanding {
                name: &player.name,
                net_result,
                remaining: net_result.abs(),
            });
        }
    }

    winners.sort_by(|a, b| b.net_result.cmp(&a.net_result));
    losers.sort_by(|a, b| a.net_result.cmp(&b.net_result));

    let mut transfers = Vec::with_capacity(winners.len() + losers.len());

    for loser in &mut losers {
        for winner in &mut winners {
            if loser.remaining.is_zero() {
                break;
            }
            if winner.remaining.is_zero() {
                continue;
            }

            let amount = loser.remaining.min(winner.remaining);
            loser.remaining -= amount;
            winner.remaining -= amount;

            if loser.name == winner.name {
                tracing::warn!(
                    player = loser.name,
                    amount = %amount,
                    "Self transfer skipped: same name on both sides"
                );
                continue;
            }

            let rounded =
                amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            if rounded.is_zero() {
                tracing::debug!(
                    from = loser.name,
                    to = winner.name,
                    amount = %amount,
                    "Sub-scale transfer dropped"
                );
                continue;
            }

            tracing::debug!(
                from = loser.name,
                to = winner.name,
                amount = %rounded,
                "Transfer matched"
            );
            transfers.push(SettlementTransfer::new(loser.name, winner.name, rounded));
        }
    }

    transfers
}
