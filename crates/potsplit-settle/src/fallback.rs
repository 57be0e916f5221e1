//! Backend-first settlement with a local fallback.
//!
//! The persistence backend normally computes and stores the transfers for
//! a session. When it cannot be reached, the caller computes them in
//! process with the same algorithm so the user is never blocked on a
//! failed call.

use std::fmt;

use potsplit_types::{PlayerBalance, SessionId, SettlementSource, SettlementTransfer};

use crate::engine::compute_settlements_at_scale;

/// A remote service able to compute and store a session's transfers.
pub trait SettlementBackend {
    type Error: fmt::Display;

    fn calculate_settlements(
        &self,
        session_id: SessionId,
        players: &[PlayerBalance],
    ) -> Result<Vec<SettlementTransfer>, Self::Error>;
}

/// Ask `backend` first; on failure compute locally at `scale`.
///
/// Never fails: the returned [`SettlementSource`] says which path produced
/// the transfers.
pub fn settle_with_fallback<B: SettlementBackend + ?Sized>(
    backend: &B,
    session_id: SessionId,
    players: &[PlayerBalance],
    scale: u32,
) -> (Vec<SettlementTransfer>, SettlementSource) {
    match backend.calculate_settlements(session_id, players) {
        Ok(transfers) => (transfers, SettlementSource::Backend),
        Err(err) => {
            tracing::warn!(
                session = %session_id,
                error = %err,
                "Backend settlement failed, computing locally"
            );
            (
                compute_settlements_at_scale(players, scale),
                SettlementSource::LocalFallback,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use potsplit_types::constants::AMOUNT_SCALE;
    use rust_decimal::Decimal;

    use super::*;

    struct Unreachable;

    impl SettlementBackend for Unreachable {
        type Error = String;

        fn calculate_settlements(
            &self,
            _session_id: SessionId,
            _players: &[PlayerBalance],
        ) -> Result<Vec<SettlementTransfer>, Self::Error> {
            Err("connection refused".into())
        }
    }

    struct Canned(Vec<SettlementTransfer>);

    impl SettlementBackend for Canned {
        type Error = String;

        fn calculate_settlements(
            &self,
            _session_id: SessionId,
            _players: &[PlayerBalance],
        ) -> Result<Vec<SettlementTransfer>, Self::Error> {
            Ok(self.0.clone())
        }
    }

    fn players() -> Vec<PlayerBalance> {
        vec![
            PlayerBalance::new("A", Decimal::new(100, 0), Decimal::new(150, 0)),
            PlayerBalance::new("B", Decimal::new(100, 0), Decimal::new(50, 0)),
        ]
    }

    #[test]
    fn backend_result_used_when_available() {
        let canned = vec![SettlementTransfer::new("B", "A", Decimal::new(50, 0))];
        let backend = Canned(canned.clone());
        let (transfers, source) =
            settle_with_fallback(&backend, SessionId::new(), &players(), AMOUNT_SCALE);
        assert_eq!(source, SettlementSource::Backend);
        assert_eq!(transfers, canned);
    }

    #[test]
    fn falls_back_to_local_on_error() {
        let (transfers, source) =
            settle_with_fallback(&Unreachable, SessionId::new(), &players(), AMOUNT_SCALE);
        assert_eq!(source, SettlementSource::LocalFallback);
        assert_eq!(
            transfers,
            vec![SettlementTransfer::new("B", "A", Decimal::new(50, 0))]
        );
    }

    #[test]
    fn works_through_trait_object() {
        let backend: Box<dyn SettlementBackend<Error = String>> = Box::new(Unreachable);
        let (_, source) =
            settle_with_fallback(backend.as_ref(), SessionId::new(), &players(), AMOUNT_SCALE);
        assert_eq!(source, SettlementSource::LocalFallback);
    }
}
