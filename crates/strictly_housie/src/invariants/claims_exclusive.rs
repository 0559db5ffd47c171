//! Claim exclusivity: each claimed pattern belongs to exactly one player.

use super::Invariant;
use crate::Session;

/// Invariant: a claimed pattern sits in exactly one win set, an open one in none.
pub struct ClaimsExclusiveInvariant;

impl Invariant<Session> for ClaimsExclusiveInvariant {
    fn holds(session: &Session) -> bool {
        session.patterns().iter().all(|pattern| {
            let holders = session
                .players()
                .filter(|player| player.won().contains(&pattern.kind()))
                .count();
            if pattern.is_claimed() {
                holders == 1
            } else {
                holders == 0
            }
        })
    }

    fn description() -> &'static str {
        "Each claimed pattern is held by exactly one player"
    }
}
