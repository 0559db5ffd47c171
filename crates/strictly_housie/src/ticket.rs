//! Player tickets: fixed grids of numbered and empty slots.

use crate::HousieError;
use crate::pool::{Number, NumberPool};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A numbered cell on a ticket.
///
/// Slots start unmarked and become marked exactly once, when their number is
/// called. Marking is idempotent and never undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    number: Number,
    marked: bool,
}

impl Slot {
    /// Creates an unmarked slot.
    pub fn new(number: Number) -> Self {
        Self {
            number,
            marked: false,
        }
    }

    /// The number printed in this slot.
    pub fn number(&self) -> Number {
        self.number
    }

    /// Whether the number has been called.
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Marks the slot.
    pub fn mark(&mut self) {
        self.marked = true;
    }
}

/// Shape of a ticket: rows, columns and how many numbers each row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct TicketLayout {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Filled slots per row.
    numbers_per_row: usize,
}

impl TicketLayout {
    /// Creates a layout, rejecting shapes that cannot be filled.
    ///
    /// # Errors
    ///
    /// Returns [`HousieError::Configuration`] when any dimension is zero or
    /// `numbers_per_row` exceeds `cols`.
    pub fn new(rows: usize, cols: usize, numbers_per_row: usize) -> Result<Self, HousieError> {
        if rows == 0 || cols == 0 || numbers_per_row == 0 {
            return Err(HousieError::configuration(format!(
                "ticket dimensions must be positive (rows={rows}, cols={cols}, numbers per row={numbers_per_row})"
            )));
        }
        if numbers_per_row > cols {
            return Err(HousieError::configuration(format!(
                "numbers per row ({numbers_per_row}) exceeds columns ({cols})"
            )));
        }
        Ok(Self {
            rows,
            cols,
            numbers_per_row,
        })
    }

    /// Total filled slots on a ticket of this layout.
    pub fn numbers_per_ticket(&self) -> usize {
        self.rows * self.numbers_per_row
    }
}

/// A `rows × cols` grid of optional slots.
///
/// The number layout is fixed at construction; only marks change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    layout: TicketLayout,
    /// Slots in row-major order.
    slots: Vec<Option<Slot>>,
}

impl Ticket {
    /// Deals a ticket from `numbers`.
    ///
    /// Each row takes the next `numbers_per_row` numbers from the pool and
    /// scatters them over distinct, uniformly chosen columns.
    ///
    /// # Errors
    ///
    /// Returns [`HousieError::ExhaustedPool`] if the pool cannot fill the
    /// whole ticket. Nothing is consumed in that case.
    #[instrument(skip(numbers, rng), fields(remaining = numbers.remaining()))]
    pub fn generate<R: Rng + ?Sized>(
        layout: TicketLayout,
        numbers: &mut NumberPool,
        rng: &mut R,
    ) -> Result<Self, HousieError> {
        let dealt = numbers.take(layout.numbers_per_ticket())?;

        let mut slots = vec![None; layout.rows * layout.cols];
        for (row, row_numbers) in dealt.chunks(layout.numbers_per_row).enumerate() {
            let columns = rand::seq::index::sample(rng, layout.cols, layout.numbers_per_row);
            for (col, number) in columns.iter().zip(row_numbers) {
                slots[row * layout.cols + col] = Some(Slot::new(*number));
            }
        }

        debug!(rows = layout.rows, cols = layout.cols, "Ticket generated");
        Ok(Self { layout, slots })
    }

    /// Builds a ticket from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`HousieError::Configuration`] when the rows are empty, ragged,
    /// or repeat a number.
    pub fn from_rows(rows: Vec<Vec<Option<Slot>>>) -> Result<Self, HousieError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(HousieError::configuration("ticket must have at least one cell"));
        }
        if rows.iter().any(|row| row.len() != cols) {
            return Err(HousieError::configuration("ticket rows differ in length"));
        }

        let widest = rows
            .iter()
            .map(|row| row.iter().flatten().count())
            .max()
            .unwrap_or(0);
        let layout = TicketLayout {
            rows: rows.len(),
            cols,
            numbers_per_row: widest,
        };
        let ticket = Self {
            layout,
            slots: rows.into_iter().flatten().collect(),
        };

        let mut seen: Vec<Number> = ticket.filled().map(|slot| slot.number).collect();
        seen.sort_unstable();
        if seen.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(HousieError::configuration("ticket repeats a number"));
        }
        Ok(ticket)
    }

    /// The ticket's shape.
    pub fn layout(&self) -> &TicketLayout {
        &self.layout
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.layout.cols
    }

    /// Cells of one row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Option<Slot>]> {
        let cols = self.layout.cols;
        self.slots.get(row * cols..(row + 1) * cols)
    }

    /// Iterates over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<Slot>]> {
        self.slots.chunks(self.layout.cols)
    }

    /// Iterates over every filled slot.
    pub fn filled(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().flatten()
    }

    /// Returns true if any slot holds `number`.
    pub fn contains(&self, number: Number) -> bool {
        self.filled().any(|slot| slot.number == number)
    }

    /// Marks the slot holding `number`, if there is one.
    ///
    /// Returns true when a previously unmarked slot was marked. Calling this
    /// again with the same number is a no-op.
    #[instrument(skip(self))]
    pub fn mark_number_if_found(&mut self, number: Number) -> bool {
        match self
            .slots
            .iter_mut()
            .flatten()
            .find(|slot| slot.number == number && !slot.marked)
        {
            Some(slot) => {
                slot.mark();
                debug!(number, "Marked slot");
                true
            }
            None => false,
        }
    }

    /// Read-only copy of the grid for rendering.
    pub fn view(&self) -> TicketView {
        TicketView {
            rows: self.iter_rows().map(<[Option<Slot>]>::to_vec).collect(),
        }
    }
}

/// Snapshot of a ticket's cells, row by row.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TicketView {
    /// Rows of optional slots.
    rows: Vec<Vec<Option<Slot>>>,
}

impl std::fmt::Display for TicketView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .rows
            .iter()
            .flatten()
            .flatten()
            .map(|slot| slot.number.to_string().len())
            .max()
            .unwrap_or(1);

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(slot) if slot.marked => write!(f, "[{:>width$}]", slot.number)?,
                    Some(slot) => write!(f, " {:>width$} ", slot.number)?,
                    None => write!(f, " {:>width$} ", "")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dealt(rows: usize, cols: usize, per_row: usize, seed: u64) -> Ticket {
        let mut rng = StdRng::seed_from_u64(seed);
        let layout = TicketLayout::new(rows, cols, per_row).expect("valid layout");
        let mut pool = NumberPool::generate(1..=90, &mut rng);
        Ticket::generate(layout, &mut pool, &mut rng).expect("pool large enough")
    }

    #[test]
    fn test_layout_rejects_too_many_per_row() {
        assert!(TicketLayout::new(3, 4, 5).is_err());
        assert!(TicketLayout::new(0, 4, 1).is_err());
        assert!(TicketLayout::new(3, 10, 10).is_ok());
    }

    #[test]
    fn test_generated_rows_have_exact_counts() {
        let ticket = dealt(3, 10, 5, 11);
        assert_eq!(ticket.filled().count(), 15);
        for row in ticket.iter_rows() {
            assert_eq!(row.len(), 10);
            assert_eq!(row.iter().flatten().count(), 5);
        }
    }

    #[test]
    fn test_generated_numbers_are_distinct() {
        let ticket = dealt(3, 10, 5, 12);
        let mut numbers: Vec<Number> = ticket.filled().map(Slot::number).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), 15);
    }

    #[test]
    fn test_full_rows_fill_every_column() {
        let ticket = dealt(2, 5, 5, 13);
        assert!(ticket.iter_rows().all(|row| row.iter().all(Option::is_some)));
    }

    #[test]
    fn test_generate_consumes_nothing_on_short_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let layout = TicketLayout::new(2, 5, 3).expect("valid layout");
        let mut pool = NumberPool::from_sequence(1..=5);
        let result = Ticket::generate(layout, &mut pool, &mut rng);
        assert!(matches!(result, Err(HousieError::ExhaustedPool { .. })));
        assert_eq!(pool.remaining(), 5);
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut ticket = dealt(3, 10, 5, 14);
        let number = ticket.filled().next().expect("filled slot").number();

        assert!(ticket.mark_number_if_found(number));
        let once = ticket.clone();
        assert!(!ticket.mark_number_if_found(number));
        assert_eq!(ticket, once);
    }

    #[test]
    fn test_mark_absent_number_is_noop() {
        let mut ticket =
            Ticket::from_rows(vec![vec![Some(Slot::new(1)), None, Some(Slot::new(2))]])
                .expect("valid ticket");
        let before = ticket.clone();
        assert!(!ticket.mark_number_if_found(3));
        assert_eq!(ticket, before);
    }

    #[test]
    fn test_from_rows_rejects_duplicates() {
        let result = Ticket::from_rows(vec![
            vec![Some(Slot::new(4)), None],
            vec![None, Some(Slot::new(4))],
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_view_renders_marks() {
        let mut ticket =
            Ticket::from_rows(vec![vec![Some(Slot::new(7)), None, Some(Slot::new(12))]])
                .expect("valid ticket");
        ticket.mark_number_if_found(12);
        assert_eq!(ticket.view().to_string(), "  7       [12]");
    }
}
