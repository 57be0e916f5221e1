//! Determinism utilities for comparing independently computed settlements.
//!
//! A backend and a local fallback that settle the same players must produce
//! the same transfers. These hashes let them compare results by a 32-byte
//! commitment. Decimals are normalized before hashing so `50` and `50.00`
//! hash identically.

use potsplit_types::{PlayerBalance, SettlementTransfer};
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

fn update_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

fn update_decimal(hasher: &mut Sha256, d: Decimal) {
    update_str(hasher, &d.normalize().to_string());
}

/// Hash over the ordered player list: name, buy-in, cash-out.
#[must_use]
pub fn compute_input_hash(players: &[PlayerBalance]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"potsplit:input:v1:");
    hasher.update((players.len() as u64).to_le_bytes());

    for player in players {
        update_str(&mut hasher, &player.name);
        update_decimal(&mut hasher, player.buy_in);
        update_decimal(&mut hasher, player.cash_out);
    }

    let result = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    out
}

/// Hash over the ordered transfer list.
///
/// The same transfers in the same order always produce the same root.
#[must_use]
pub fn compute_settlement_root(transfers: &[SettlementTransfer]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"potsplit:settlement_root:v1:");
    hasher.update((transfers.len() as u64).to_le_bytes());

    for transfer in transfers {
        update_str(&mut hasher, &transfer.from);
        update_str(&mut hasher, &transfer.to);
        update_decimal(&mut hasher, transfer.amount);
    }

    let result = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    out
}

/// Recompute the root over `transfers` and compare with `expected_root`.
#[must_use]
pub fn verify_settlement_root(transfers: &[SettlementTransfer], expected_root: &[u8; 32]) -> bool {
    compute_settlement_root(transfers) == *expected_root
}
