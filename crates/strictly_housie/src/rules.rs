//! Pure win predicates over ticket marking state.
//!
//! These functions hold no claim state; [`Pattern`](crate::Pattern) layers the
//! claimed flag on top.

use crate::{Slot, Ticket};
use tracing::instrument;

/// Marked slots needed for an Early Five.
pub const EARLY_FIVE_MARKS: usize = 5;

/// Counts marked filled slots across the whole ticket.
pub fn marked_count(ticket: &Ticket) -> usize {
    ticket.filled().filter(|slot| slot.is_marked()).count()
}

/// True when at least five filled slots are marked.
#[instrument(skip(ticket))]
pub fn is_early_five(ticket: &Ticket) -> bool {
    marked_count(ticket) >= EARLY_FIVE_MARKS
}

/// True when every filled slot on the ticket is marked.
#[instrument(skip(ticket))]
pub fn is_full_house(ticket: &Ticket) -> bool {
    ticket.filled().all(Slot::is_marked)
}

/// True when every filled slot in row 0 is marked.
#[instrument(skip(ticket))]
pub fn is_top_line(ticket: &Ticket) -> bool {
    ticket
        .row(0)
        .is_some_and(|row| row.iter().flatten().all(Slot::is_marked))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two rows of fifteen columns with numbers in the first ten of each.
    fn two_row_ticket() -> Ticket {
        let row = |offset: u32| {
            (0..15)
                .map(|i| (i < 10).then(|| Slot::new(offset + i)))
                .collect::<Vec<_>>()
        };
        Ticket::from_rows(vec![row(0), row(100)]).expect("valid ticket")
    }

    #[test]
    fn test_four_marks_is_not_early_five() {
        let mut ticket = two_row_ticket();
        for number in [0, 1, 100, 101] {
            ticket.mark_number_if_found(number);
        }
        assert_eq!(marked_count(&ticket), 4);
        assert!(!is_early_five(&ticket));

        ticket.mark_number_if_found(2);
        assert!(is_early_five(&ticket));
    }

    #[test]
    fn test_top_line_ignores_lower_rows() {
        let mut ticket = two_row_ticket();
        for number in 100..110 {
            ticket.mark_number_if_found(number);
        }
        for number in 0..9 {
            ticket.mark_number_if_found(number);
        }
        assert!(!is_top_line(&ticket));

        ticket.mark_number_if_found(9);
        assert!(is_top_line(&ticket));
    }

    #[test]
    fn test_full_house_needs_every_number() {
        let mut ticket = two_row_ticket();
        for number in (0..10).chain(100..109) {
            ticket.mark_number_if_found(number);
        }
        assert!(!is_full_house(&ticket));

        ticket.mark_number_if_found(109);
        assert!(is_full_house(&ticket));
        assert!(is_top_line(&ticket));
    }
}
