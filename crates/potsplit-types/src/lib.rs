//! # potsplit-types
//!
//! Shared types, errors, and configuration for the **potsplit** settlement
//! engine.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`SessionId`]
//! - **Player model**: [`PlayerBalance`], [`EntryMode`], [`NetPosition`], [`Standing`]
//! - **Transfer model**: [`SettlementTransfer`]
//! - **Bundle model**: [`SettlementBundle`], [`SettlementSource`]
//! - **Configuration**: [`SettlementConfig`]
//! - **Errors**: [`LedgerError`] with `PL_ERR_` prefix codes
//! - **Constants**: rounding scale, tolerances and defaults

pub mod bundle;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod player;
pub mod transfer;

#[cfg(any(test, feature = "test-helpers"))]
pub mod fixtures;

pub use bundle::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use player::*;
pub use transfer::*;

// Constants are accessed via `potsplit_types::constants::FOO`.
