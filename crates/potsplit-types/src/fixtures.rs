//! Randomized player fixtures for tests.

use rand::Rng;
use rust_decimal::Decimal;

use crate::PlayerBalance;

/// Build `n` players whose buy-ins and cash-outs add up to the same total.
///
/// Amounts are whole cents. Cash-outs are a random redistribution of the
/// pot, so some players win, some lose, and some may break even.
pub fn random_balanced_session<R: Rng>(rng: &mut R, n: usize) -> Vec<PlayerBalance> {
    let buy_ins: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=50_000)).collect();
    let pot: i64 = buy_ins.iter().sum();

    let mut cash_outs = vec![0i64; n];
    let mut left = pot;
    for slot in cash_outs.iter_mut().take(n.saturating_sub(1)) {
        let take = if left > 0 { rng.gen_range(0..=left) } else { 0 };
        *slot = take;
        left -= take;
    }
    if let Some(last) = cash_outs.last_mut() {
        *last += left;
    }

    buy_ins
        .into_iter()
        .zip(cash_outs)
        .enumerate()
        .map(|(i, (b, c))| {
            PlayerBalance::new(format!("P{i}"), Decimal::new(b, 2), Decimal::new(c, 2))
        })
        .collect()
}

/// Build `n` players with independent random buy-ins and cash-outs.
/// Totals generally do not balance.
pub fn random_session<R: Rng>(rng: &mut R, n: usize) -> Vec<PlayerBalance> {
    (0..n)
        .map(|i| {
            PlayerBalance::new(
                format!("P{i}"),
                Decimal::new(rng.gen_range(0..=50_000), 2),
                Decimal::new(rng.gen_range(0..=50_000), 2),
            )
        })
        .collect()
}
