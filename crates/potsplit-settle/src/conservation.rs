//! Conservation checks on a session and on a computed transfer list.
//!
//! For a balanced session the transfers must zero out every player:
//! ```text
//! ∀ player: Σ(received) - Σ(paid) == net
//! ```
//! within a rounding tolerance. On an unbalanced session this cannot hold,
//! so [`check_session_balance`] comes first.

use std::collections::BTreeMap;

use potsplit_types::{LedgerError, PlayerBalance, Result, SettlementTransfer, constants};
use rust_decimal::Decimal;

/// Total buy-ins and total cash-outs, saturating at the `Decimal` bounds.
#[must_use]
pub fn session_totals(players: &[PlayerBalance]) -> (Decimal, Decimal) {
    players
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(buy, cash), p| {
            (buy.saturating_add(p.buy_in), cash.saturating_add(p.cash_out))
        })
}

/// Whether `|cash_outs - buy_ins|` is within `tolerance` (strictly below it,
/// or exactly zero).
#[must_use]
pub fn is_balanced(difference: Decimal, tolerance: Decimal) -> bool {
    difference.is_zero() || difference.abs() < tolerance
}

/// Fail when total buy-ins and total cash-outs disagree.
///
/// # Errors
/// Returns [`LedgerError::UnbalancedSession`] with both totals and the
/// signed difference (`cash_outs - buy_ins`).
pub fn check_session_balance(players: &[PlayerBalance], tolerance: Decimal) -> Result<()> {
    let (buy_ins, cash_outs) = session_totals(players);
    let difference = cash_outs.saturating_sub(buy_ins);
    if !is_balanced(difference, tolerance) {
        return Err(LedgerError::UnbalancedSession {
            buy_ins,
            cash_outs,
            difference,
        });
    }
    Ok(())
}

#[derive(Default)]
struct Flow {
    net: Decimal,
    paid: Decimal,
    received: Decimal,
    transfers: u32,
}

/// Half a unit at `scale`: the most one rounded transfer can drift.
fn rounding_slack(scale: u32) -> Decimal {
    Decimal::new(5, scale.saturating_add(1).min(constants::MAX_AMOUNT_SCALE))
}

/// Verify a transfer list against the players it settles.
///
/// Checks every transfer is positive and between two different names, then
/// that each name's `received - paid` equals its net result. Records
/// sharing a name are folded into one identity, so a name may both pay and
/// receive. Each transfer was rounded at `scale`, so every transfer a name
/// takes part in widens its allowance by half a unit on top of `tolerance`.
///
/// # Errors
/// - `NonPositiveAmount` for a zero or negative transfer
/// - `SelfTransfer` when `from == to`
/// - `ConservationViolation` when a player's flows miss their net result
pub fn verify_transfers(
    players: &[PlayerBalance],
    transfers: &[SettlementTransfer],
    tolerance: Decimal,
    scale: u32,
) -> Result<()> {
    let mut flows: BTreeMap<&str, Flow> = BTreeMap::new();

    for player in players {
        let flow = flows.entry(player.name.as_str()).or_default();
        flow.net = flow.net.saturating_add(player.net_result());
    }

    for transfer in transfers {
        if transfer.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount {
                from: transfer.from.clone(),
                to: transfer.to.clone(),
                amount: transfer.amount,
            });
        }
        if transfer.from == transfer.to {
            return Err(LedgerError::SelfTransfer(transfer.from.clone()));
        }
        let payer = flows.entry(transfer.from.as_str()).or_default();
        payer.paid = payer.paid.saturating_add(transfer.amount);
        payer.transfers += 1;
        let payee = flows.entry(transfer.to.as_str()).or_default();
        payee.received = payee.received.saturating_add(transfer.amount);
        payee.transfers += 1;
    }

    let slack = rounding_slack(scale);
    for (name, flow) in &flows {
        let settled = flow.received.saturating_sub(flow.paid);
        let allowance = tolerance.saturating_add(slack * Decimal::from(flow.transfers));
        if !is_balanced(settled.saturating_sub(flow.net), allowance) {
            return Err(LedgerError::ConservationViolation {
                reason: format!(
                    "{name} settled {} against net result {}",
                    settled.normalize(),
                    flow.net.normalize()
                ),
            });
        }
    }

    Ok(())
}
