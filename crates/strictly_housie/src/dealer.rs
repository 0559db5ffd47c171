//! The dealer: draws numbers and announces them to subscribers.

use crate::HousieError;
use crate::pool::{Number, NumberPool};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, instrument};

/// Receives every number the dealer calls.
pub trait NumberListener {
    /// Called once per draw, after the number leaves the pool.
    fn on_number_called(&mut self, number: Number);
}

/// Shared handle to a listener.
///
/// The dealer keeps only weak references; listeners are owned elsewhere.
pub type ListenerHandle = Rc<RefCell<dyn NumberListener>>;

/// Draws from a private pool and broadcasts each number.
pub struct Dealer {
    numbers: NumberPool,
    listeners: Vec<Weak<RefCell<dyn NumberListener>>>,
    called: Vec<Number>,
}

impl Dealer {
    /// Creates a dealer that calls numbers in the pool's order.
    pub fn new(numbers: NumberPool) -> Self {
        Self {
            numbers,
            listeners: Vec::new(),
            called: Vec::new(),
        }
    }

    /// Subscribes a listener to future draws.
    ///
    /// Numbers called before subscription are not replayed.
    pub fn add_listener(&mut self, listener: &ListenerHandle) {
        self.listeners.push(Rc::downgrade(listener));
    }

    /// Number of live subscribers.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.strong_count() > 0)
            .count()
    }

    /// Draws the next number and notifies every live listener.
    ///
    /// # Errors
    ///
    /// Returns [`HousieError::ExhaustedPool`] once every number has been
    /// called. No listener is notified in that case.
    #[instrument(skip(self), fields(remaining = self.numbers.remaining()))]
    pub fn draw_next(&mut self) -> Result<Number, HousieError> {
        let number = self.numbers.pop()?;
        self.called.push(number);

        self.listeners.retain(|listener| listener.strong_count() > 0);
        for listener in self.listeners.iter().filter_map(Weak::upgrade) {
            listener.borrow_mut().on_number_called(number);
        }

        debug!(number, listeners = self.listeners.len(), "Number called");
        Ok(number)
    }

    /// Numbers called so far, oldest first.
    pub fn called(&self) -> &[Number] {
        &self.called
    }

    /// The most recently called number.
    pub fn last_called(&self) -> Option<Number> {
        self.called.last().copied()
    }

    /// Numbers left to call.
    pub fn remaining(&self) -> usize {
        self.numbers.remaining()
    }
}

impl std::fmt::Debug for Dealer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dealer")
            .field("remaining", &self.numbers.remaining())
            .field("listeners", &self.listeners.len())
            .field("called", &self.called)
            .finish()
    }
}
