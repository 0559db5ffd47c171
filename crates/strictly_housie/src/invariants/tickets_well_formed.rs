//! Ticket shape invariant: every ticket matches the game's layout.

use super::Invariant;
use crate::Session;
use crate::pool::Number;
use crate::ticket::{Ticket, TicketLayout};
use std::collections::HashSet;

/// Checks one ticket against a layout.
///
/// The ticket must have the layout's dimensions, exactly `numbers_per_row`
/// filled slots in every row, and no repeated number.
pub fn ticket_is_well_formed(ticket: &Ticket, layout: &TicketLayout) -> bool {
    if ticket.rows() != *layout.rows() || ticket.cols() != *layout.cols() {
        return false;
    }
    let rows_full = ticket
        .iter_rows()
        .all(|row| row.iter().flatten().count() == *layout.numbers_per_row());

    let mut seen = HashSet::<Number>::new();
    let distinct = ticket.filled().all(|slot| seen.insert(slot.number()));

    rows_full && distinct
}

/// Invariant: every player's ticket fits the session layout.
pub struct TicketsWellFormedInvariant;

impl Invariant<Session> for TicketsWellFormedInvariant {
    fn holds(session: &Session) -> bool {
        session
            .players()
            .all(|player| ticket_is_well_formed(player.ticket(), session.layout()))
    }

    fn description() -> &'static str {
        "Tickets have the configured shape and distinct numbers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Slot;

    #[test]
    fn test_accepts_matching_ticket() {
        let layout = TicketLayout::new(2, 3, 2).expect("layout");
        let ticket = Ticket::from_rows(vec![
            vec![Some(Slot::new(1)), None, Some(Slot::new(2))],
            vec![None, Some(Slot::new(3)), Some(Slot::new(4))],
        ])
        .expect("ticket");
        assert!(ticket_is_well_formed(&ticket, &layout));
    }

    #[test]
    fn test_rejects_short_row() {
        let layout = TicketLayout::new(2, 3, 2).expect("layout");
        let ticket = Ticket::from_rows(vec![
            vec![Some(Slot::new(1)), None, Some(Slot::new(2))],
            vec![None, Some(Slot::new(3)), None],
        ])
        .expect("ticket");
        assert!(!ticket_is_well_formed(&ticket, &layout));
    }

    #[test]
    fn test_rejects_wrong_width() {
        let layout = TicketLayout::new(1, 4, 2).expect("layout");
        let ticket =
            Ticket::from_rows(vec![vec![Some(Slot::new(1)), Some(Slot::new(2)), None]])
                .expect("ticket");
        assert!(!ticket_is_well_formed(&ticket, &layout));
    }
}
