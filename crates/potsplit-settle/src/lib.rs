//! # potsplit-settle
//!
//! **Settlement engine for poker sessions.**
//!
//! Given each player's buy-in and cash-out, produce the peer-to-peer
//! payments that zero out every net result.
//!
//! - [`compute_settlements`]: the pure greedy matcher. Total over any
//!   input, no validation, no side effects
//! - [`validate_players`], [`check_session_balance`], [`verify_transfers`]:
//!   the caller-side checks around it
//! - [`compute_input_hash`], [`compute_settlement_root`]: commitments for
//!   comparing a backend result with a local one
//! - [`SessionSettler`]: all of the above for one session, with
//!   [`settle_with_fallback`] when a backend is involved

pub mod conservation;
pub mod determinism;
pub mod engine;
pub mod fallback;
pub mod session;
pub mod summary;
pub mod validation;

pub use conservation::{check_session_balance, session_totals, verify_transfers};
pub use determinism::{compute_input_hash, compute_settlement_root, verify_settlement_root};
pub use engine::{compute_settlements, compute_settlements_at_scale};
pub use fallback::{SettlementBackend, settle_with_fallback};
pub use session::SessionSettler;
pub use summary::{SessionSummary, summarize};
pub use validation::validate_players;
