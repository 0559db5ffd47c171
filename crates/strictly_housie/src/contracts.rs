//! Contract-based validation for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::invariants::{HousieInvariants, InvariantSet};
use crate::{HousieError, PatternKind, Session};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for a transition.
pub trait Contract<S> {
    /// State captured before the transition for the postcondition.
    type Snapshot;

    /// Checks preconditions before the transition.
    fn pre(state: &S) -> Result<(), HousieError>;

    /// Captures what the postcondition compares against.
    fn snapshot(state: &S) -> Self::Snapshot;

    /// Checks postconditions after the transition.
    fn post(before: &Self::Snapshot, after: &S) -> Result<(), HousieError>;
}

/// Claim state captured before an advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSnapshot {
    claimed: Vec<bool>,
    won: Vec<BTreeSet<PatternKind>>,
    called: usize,
}

/// Contract for [`Session::advance`].
///
/// Preconditions:
/// - The game is in progress
///
/// Postconditions:
/// - Exactly one more number has been called
/// - Claimed flags never revert
/// - Win sets only grow
/// - Every session invariant holds
pub struct AdvanceContract;

impl Contract<Session> for AdvanceContract {
    type Snapshot = ClaimSnapshot;

    fn pre(session: &Session) -> Result<(), HousieError> {
        if session.is_over() {
            warn!("Advance requested after game over");
            return Err(HousieError::InvalidState {
                action: "call the next number",
                phase: session.phase(),
            });
        }
        Ok(())
    }

    fn snapshot(session: &Session) -> ClaimSnapshot {
        ClaimSnapshot {
            claimed: session.patterns().iter().map(|p| p.is_claimed()).collect(),
            won: session.players().map(|p| p.won().clone()).collect(),
            called: session.called().len(),
        }
    }

    fn post(before: &ClaimSnapshot, after: &Session) -> Result<(), HousieError> {
        if after.called().len() != before.called + 1 {
            return Err(HousieError::InvariantViolation(
                "advance must call exactly one number".to_string(),
            ));
        }

        let flags_kept = before
            .claimed
            .iter()
            .zip(after.patterns())
            .all(|(was, now)| !was || now.is_claimed());
        if !flags_kept {
            return Err(HousieError::InvariantViolation(
                "a claimed pattern was reopened".to_string(),
            ));
        }

        let wins_kept = before
            .won
            .iter()
            .zip(after.players())
            .all(|(was, now)| was.is_subset(now.won()));
        if !wins_kept {
            return Err(HousieError::InvariantViolation(
                "a player lost a win".to_string(),
            ));
        }

        HousieInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HousieError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that every session invariant holds (debug builds only).
#[instrument(skip(session))]
pub fn assert_invariants(session: &Session) {
    debug_assert!(
        HousieInvariants::check_all(session).is_ok(),
        "Session invariants violated"
    );
}
