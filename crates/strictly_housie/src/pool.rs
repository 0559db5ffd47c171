//! Exhaustible bags of shuffled numbers.
//!
//! A [`NumberPool`] holds every number of an inclusive range exactly once, in
//! uniformly random order. Pools are never shared: every ticket and the dealer
//! each get their own freshly shuffled bag from a [`NumberSource`].

use crate::HousieError;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use tracing::{debug, instrument, warn};

/// A number printed on tickets and called by the dealer.
pub type Number = u32;

/// A shuffled, exhaustible sequence of unique numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPool {
    numbers: VecDeque<Number>,
    drawn: usize,
}

impl NumberPool {
    /// Shuffles every number in `range` into a new pool.
    ///
    /// Each call shuffles independently; two pools over the same range share
    /// no state.
    #[instrument(skip(rng))]
    pub fn generate<R: Rng + ?Sized>(range: RangeInclusive<Number>, rng: &mut R) -> Self {
        let mut numbers: Vec<Number> = range.collect();
        numbers.shuffle(rng);
        debug!(size = numbers.len(), "Generated number pool");
        Self {
            numbers: numbers.into(),
            drawn: 0,
        }
    }

    /// Builds a pool that yields `numbers` in the given order.
    ///
    /// Intended for scripted games and tests; duplicates are the caller's
    /// responsibility.
    pub fn from_sequence(numbers: impl IntoIterator<Item = Number>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Removes and returns the front number.
    ///
    /// # Errors
    ///
    /// Returns [`HousieError::ExhaustedPool`] when no numbers remain.
    pub fn pop(&mut self) -> Result<Number, HousieError> {
        match self.numbers.pop_front() {
            Some(number) => {
                self.drawn += 1;
                Ok(number)
            }
            None => {
                warn!(drawn = self.drawn, "Pop from exhausted number pool");
                Err(HousieError::ExhaustedPool { drawn: self.drawn })
            }
        }
    }

    /// Removes `count` numbers, or none at all if fewer remain.
    ///
    /// # Errors
    ///
    /// Returns [`HousieError::ExhaustedPool`] without consuming anything when
    /// the pool holds fewer than `count` numbers.
    pub fn take(&mut self, count: usize) -> Result<Vec<Number>, HousieError> {
        if count > self.numbers.len() {
            warn!(count, remaining = self.numbers.len(), "Pool too small");
            return Err(HousieError::ExhaustedPool { drawn: self.drawn });
        }
        self.drawn += count;
        Ok(self.numbers.drain(..count).collect())
    }

    /// Numbers still in the pool.
    pub fn remaining(&self) -> usize {
        self.numbers.len()
    }

    /// Numbers already removed from the pool.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Returns true when nothing is left to draw.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Iterates over the remaining numbers in draw order.
    pub fn iter(&self) -> impl Iterator<Item = Number> + '_ {
        self.numbers.iter().copied()
    }
}

/// Something that hands out fresh bags of numbers.
pub trait NumberSource {
    /// Creates a new, independently shuffled pool.
    fn create_pool(&mut self) -> NumberPool;
}

/// Produces shuffled pools over a fixed inclusive range.
#[derive(Debug, Clone)]
pub struct RandomNumberSource<R> {
    range: RangeInclusive<Number>,
    rng: R,
}

impl<R: Rng> RandomNumberSource<R> {
    /// Creates a source over `range` driven by `rng`.
    pub fn new(range: RangeInclusive<Number>, rng: R) -> Self {
        Self { range, rng }
    }

    /// The range every pool covers.
    pub fn range(&self) -> &RangeInclusive<Number> {
        &self.range
    }

    /// Mutable access to the underlying generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: Rng> NumberSource for RandomNumberSource<R> {
    fn create_pool(&mut self) -> NumberPool {
        NumberPool::generate(self.range.clone(), &mut self.rng)
    }
}
