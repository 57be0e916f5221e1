//! System-wide constants for the potsplit settlement engine.

use rust_decimal::Decimal;

/// Decimal places kept on every emitted transfer amount.
pub const AMOUNT_SCALE: u32 = 2;

/// Largest emission scale a config may request (`Decimal` supports 28).
pub const MAX_AMOUNT_SCALE: u32 = 28;

/// Default tolerance when comparing total buy-ins against total cash-outs,
/// and when checking per-player conservation of transfers (0.01).
pub const DEFAULT_BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Minimum number of players a caller should require before settling.
pub const DEFAULT_MIN_PLAYERS: usize = 2;
