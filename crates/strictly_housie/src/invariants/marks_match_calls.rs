//! Marking invariant: a slot is marked exactly when its number was called.

use super::Invariant;
use crate::Session;
use std::collections::HashSet;

/// Invariant: marks on every ticket agree with the dealer's call history.
pub struct MarksMatchCallsInvariant;

impl Invariant<Session> for MarksMatchCallsInvariant {
    fn holds(session: &Session) -> bool {
        let called: HashSet<_> = session.called().iter().copied().collect();
        session.players().all(|player| {
            player
                .ticket()
                .filled()
                .all(|slot| slot.is_marked() == called.contains(&slot.number()))
        })
    }

    fn description() -> &'static str {
        "Slots are marked exactly when their number has been called"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dealer::NumberListener;
    use crate::{GameConfig, Session};

    #[test]
    fn test_holds_while_drawing() {
        let mut session =
            Session::configure(GameConfig::default().with_seed(8)).expect("default game");
        for _ in 0..20 {
            session.advance().expect("draw");
            assert!(MarksMatchCallsInvariant::holds(&session));
        }
    }

    #[test]
    fn test_detects_mark_without_call() {
        let session =
            Session::configure(GameConfig::default().with_seed(9)).expect("default game");
        let number = session
            .player(1)
            .and_then(|player| player.ticket().filled().next().map(|slot| slot.number()))
            .expect("ticket has numbers");

        session.players[0].borrow_mut().on_number_called(number);
        assert!(!MarksMatchCallsInvariant::holds(&session));
    }
}
