//! Session-level settlement.
//!
//! Wraps the pure engine with everything a caller does around it:
//! 1. Validate the player list
//! 2. Check that buy-ins and cash-outs balance (warn, or refuse when strict)
//! 3. Compute transfers locally, or ask a backend and fall back locally
//! 4. Verify conservation on balanced sessions
//! 5. Hash input and output into a [`SettlementBundle`]

use chrono::Utc;
use potsplit_types::{
    LedgerError, PlayerBalance, Result, SessionId, SettlementBundle, SettlementConfig,
    SettlementSource, SettlementTransfer,
};

use crate::conservation::{check_session_balance, verify_transfers};
use crate::determinism::{compute_input_hash, compute_settlement_root};
use crate::engine::compute_settlements_at_scale;
use crate::fallback::{SettlementBackend, settle_with_fallback};
use crate::validation::validate_players;

/// Stateless settler for whole sessions.
///
/// Settling the same session twice yields two independent bundles; the
/// caller replaces the older one.
#[derive(Debug, Clone, Default)]
pub struct SessionSettler {
    config: SettlementConfig,
}

impl SessionSettler {
    /// Create a settler. The config is checked up front.
    pub fn new(config: SettlementConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    /// Settle a session in process.
    ///
    /// # Errors
    /// - Validation errors from [`validate_players`]
    /// - `UnbalancedSession` when `require_balanced` is set
    /// - `ConservationViolation` if the computed transfers fail verification
    pub fn settle(
        &self,
        session_id: SessionId,
        players: &[PlayerBalance],
    ) -> Result<SettlementBundle> {
        let balanced = self.prepare(session_id, players)?;
        let transfers = compute_settlements_at_scale(players, self.config.amount_scale);
        self.finish(session_id, players, transfers, SettlementSource::Local, balanced)
    }

    /// Settle through `backend`, computing locally if it fails.
    ///
    /// Backend transfers go through the same conservation check as local
    /// ones.
    pub fn settle_via<B: SettlementBackend + ?Sized>(
        &self,
        backend: &B,
        session_id: SessionId,
        players: &[PlayerBalance],
    ) -> Result<SettlementBundle> {
        let balanced = self.prepare(session_id, players)?;
        let (transfers, source) =
            settle_with_fallback(backend, session_id, players, self.config.amount_scale);
        self.finish(session_id, players, transfers, source, balanced)
    }

    /// Recompute `players` and compare against a recorded bundle.
    ///
    /// # Errors
    /// - `SessionMismatch` if the bundle belongs to another session
    /// - `DeterminismViolation` if either the input hash or the settlement
    ///   root differs
    pub fn verify_bundle(
        &self,
        session_id: SessionId,
        bundle: &SettlementBundle,
        players: &[PlayerBalance],
    ) -> Result<()> {
        if bundle.session_id != session_id {
            return Err(LedgerError::SessionMismatch {
                expected: session_id,
                actual: bundle.session_id,
            });
        }

        let input_hash = compute_input_hash(players);
        if input_hash != bundle.input_hash {
            return Err(LedgerError::DeterminismViolation {
                expected: hex::encode(bundle.input_hash),
                actual: hex::encode(input_hash),
            });
        }

        let transfers = compute_settlements_at_scale(players, self.config.amount_scale);
        let root = compute_settlement_root(&transfers);
        if root != bundle.settlement_root {
            return Err(LedgerError::DeterminismViolation {
                expected: hex::encode(bundle.settlement_root),
                actual: hex::encode(root),
            });
        }
        Ok(())
    }

    /// Validate and balance-check. Returns whether the session balances.
    fn prepare(&self, session_id: SessionId, players: &[PlayerBalance]) -> Result<bool> {
        validate_players(players, &self.config)?;

        match check_session_balance(players, self.config.balance_tolerance) {
            Ok(()) => Ok(true),
            Err(err) if self.config.require_balanced => Err(err),
            Err(err) => {
                tracing::warn!(
                    session = %session_id,
                    error = %err,
                    "Settling unbalanced session, residue will be absorbed"
                );
                Ok(false)
            }
        }
    }

    fn finish(
        &self,
        session_id: SessionId,
        players: &[PlayerBalance],
        transfers: Vec<SettlementTransfer>,
        source: SettlementSource,
        balanced: bool,
    ) -> Result<SettlementBundle> {
        if balanced {
            verify_transfers(
                players,
                &transfers,
                self.config.balance_tolerance,
                self.config.amount_scale,
            )?;
        }

        let settlement_root = compute_settlement_root(&transfers);
        let bundle = SettlementBundle {
            session_id,
            input_hash: compute_input_hash(players),
            settlement_root,
            transfers,
            source,
            computed_at: Utc::now(),
        };

        tracing::info!(
            session = %session_id,
            players = players.len(),
            transfers = bundle.transfers.len(),
            source = %source,
            settlement_root = hex::encode(settlement_root),
            "Session settled"
        );

        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn p(name: &str, buy_in: i64, cash_out: i64) -> PlayerBalance {
        PlayerBalance::new(name, Decimal::new(buy_in, 0), Decimal::new(cash_out, 0))
    }

    #[test]
    fn settle_balanced_session() {
        let settler = SessionSettler::default();
        let session = SessionId::new();
        let bundle = settler
            .settle(session, &[p("A", 100, 150), p("B", 100, 50)])
            .unwrap();
        assert_eq!(bundle.session_id, session);
        assert_eq!(bundle.source, SettlementSource::Local);
        assert_eq!(
            bundle.transfers,
            vec![SettlementTransfer::new("B", "A", Decimal::new(50, 0))]
        );
    }

    #[test]
    fn settle_rejects_single_player() {
        let settler = SessionSettler::default();
        let err = settler.settle(SessionId::new(), &[p("A", 100, 50)]).unwrap_err();
        assert!(matches!(err, LedgerError::TooFewPlayers { .. }));
    }

    #[test]
    fn lenient_settler_accepts_unbalanced() {
        let settler = SessionSettler::default();
        let bundle = settler
            .settle(SessionId::new(), &[p("A", 0, 100), p("B", 60, 0)])
            .unwrap();
        assert_eq!(bundle.total_transferred(), Decimal::new(60, 0));
    }

    #[test]
    fn strict_settler_refuses_unbalanced() {
        let settler = SessionSettler::new(SettlementConfig::strict()).unwrap();
        let err = settler
            .settle(SessionId::new(), &[p("A", 0, 100), p("B", 60, 0)])
            .unwrap_err();
        assert!(matches!(err, LedgerError::UnbalancedSession { .. }));
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = SettlementConfig {
            min_players: 0,
            ..SettlementConfig::default()
        };
        assert!(SessionSettler::new(cfg).is_err());
    }

    #[test]
    fn verify_bundle_roundtrip() {
        let settler = SessionSettler::default();
        let session = SessionId::new();
        let players = [p("A", 100, 200), p("B", 100, 50), p("C", 100, 50)];
        let bundle = settler.settle(session, &players).unwrap();
        settler.verify_bundle(session, &bundle, &players).unwrap();
    }

    #[test]
    fn verify_bundle_detects_changed_players() {
        let settler = SessionSettler::default();
        let session = SessionId::new();
        let players = [p("A", 100, 150), p("B", 100, 50)];
        let bundle = settler.settle(session, &players).unwrap();

        let edited = [p("A", 100, 160), p("B", 100, 40)];
        let err = settler.verify_bundle(session, &bundle, &edited).unwrap_err();
        assert!(matches!(err, LedgerError::DeterminismViolation { .. }));
    }

    #[test]
    fn verify_bundle_detects_tampered_transfers() {
        let settler = SessionSettler::default();
        let session = SessionId::new();
        let players = [p("A", 100, 150), p("B", 100, 50)];
        let mut bundle = settler.settle(session, &players).unwrap();
        bundle.settlement_root = [0u8; 32];
        let err = settler.verify_bundle(session, &bundle, &players).unwrap_err();
        assert!(matches!(err, LedgerError::DeterminismViolation { .. }));
    }

    #[test]
    fn verify_bundle_wrong_session() {
        let settler = SessionSettler::default();
        let players = [p("A", 100, 150), p("B", 100, 50)];
        let bundle = settler.settle(SessionId::new(), &players).unwrap();
        let err = settler
            .verify_bundle(SessionId::new(), &bundle, &players)
            .unwrap_err();
        assert!(matches!(err, LedgerError::SessionMismatch { .. }));
    }

    #[test]
    fn settle_accepts_sub_cent_session() {
        let settler = SessionSettler::default();
        let players = [
            PlayerBalance::new("W", Decimal::ZERO, Decimal::new(30_015, 3)),
            PlayerBalance::new("L1", Decimal::new(10_005, 3), Decimal::ZERO),
            PlayerBalance::new("L2", Decimal::new(10_005, 3), Decimal::ZERO),
            PlayerBalance::new("L3", Decimal::new(10_005, 3), Decimal::ZERO),
        ];
        let bundle = settler.settle(SessionId::new(), &players).unwrap();
        assert_eq!(bundle.transfers.len(), 3);
        assert!(bundle.transfers.iter().all(|t| t.amount == Decimal::new(1001, 2)));
    }

    #[test]
    fn settle_accepts_duplicate_names() {
        let settler = SessionSettler::default();
        let players = [p("A", 0, 50), p("B", 50, 0), p("A", 50, 0), p("C", 0, 50)];
        let bundle = settler.settle(SessionId::new(), &players).unwrap();
        assert_eq!(
            bundle.transfers,
            vec![
                SettlementTransfer::new("B", "A", Decimal::new(50, 0)),
                SettlementTransfer::new("A", "C", Decimal::new(50, 0)),
            ]
        );
    }
}
