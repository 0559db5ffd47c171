//! Players: ticket holders that react to called numbers.

use crate::dealer::NumberListener;
use crate::pool::Number;
use crate::{PatternKind, Ticket};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Sequential player identifier, starting at 1.
pub type PlayerId = usize;

/// A participant holding exactly one ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    ticket: Ticket,
    won: BTreeSet<PatternKind>,
}

impl Player {
    /// Creates a player with an empty win set.
    pub fn new(id: PlayerId, ticket: Ticket) -> Self {
        Self {
            id,
            ticket,
            won: BTreeSet::new(),
        }
    }

    /// The player's id.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's ticket.
    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    /// Patterns this player has claimed.
    pub fn won(&self) -> &BTreeSet<PatternKind> {
        &self.won
    }

    /// Records a claimed pattern. Wins are never removed during a game.
    #[instrument(skip(self), fields(player = self.id))]
    pub(crate) fn record_win(&mut self, pattern: PatternKind) {
        self.won.insert(pattern);
        debug!(total = self.won.len(), "Win recorded");
    }

    /// Replaces the ticket and clears wins for a new game.
    pub(crate) fn redeal(&mut self, ticket: Ticket) {
        self.ticket = ticket;
        self.won.clear();
    }
}

impl NumberListener for Player {
    fn on_number_called(&mut self, number: Number) {
        self.ticket.mark_number_if_found(number);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Slot;

    #[test]
    fn test_called_number_marks_ticket() {
        let ticket = Ticket::from_rows(vec![vec![Some(Slot::new(8)), None]]).expect("ticket");
        let mut player = Player::new(1, ticket);

        player.on_number_called(3);
        assert!(player.ticket().filled().all(|slot| !slot.is_marked()));

        player.on_number_called(8);
        assert!(player.ticket().filled().all(Slot::is_marked));
    }

    #[test]
    fn test_wins_accumulate() {
        let ticket = Ticket::from_rows(vec![vec![Some(Slot::new(1))]]).expect("ticket");
        let mut player = Player::new(2, ticket);
        player.record_win(PatternKind::TopLine);
        player.record_win(PatternKind::FullHouse);
        player.record_win(PatternKind::TopLine);
        assert_eq!(player.won().len(), 2);
    }
}
