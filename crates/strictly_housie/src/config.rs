//! Game parameters and their validation.

use crate::pool::Number;
use crate::ticket::TicketLayout;
use crate::{HousieError, PatternKind};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use tracing::{instrument, warn};

/// Order in which players are checked for wins after each draw.
///
/// When two players complete the same pattern on the same draw, the one
/// checked first claims it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EvaluationOrder {
    /// Reshuffle the player order before every evaluation pass.
    #[default]
    Fair,
    /// Always check players in ascending id order.
    Stable,
}

/// Complete description of one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Lowest number in play.
    #[setters(skip)]
    range_start: Number,
    /// Highest number in play.
    #[setters(skip)]
    range_end: Number,
    /// How many players take part.
    #[setters(skip)]
    players: usize,
    /// Ticket rows.
    #[setters(skip)]
    rows: usize,
    /// Ticket columns.
    #[setters(skip)]
    cols: usize,
    /// Filled slots in every ticket row.
    #[setters(skip)]
    numbers_per_row: usize,
    /// Player evaluation order.
    #[serde(default)]
    order: EvaluationOrder,
    /// Patterns that can be won this game.
    #[serde(default = "PatternKind::all")]
    patterns: Vec<PatternKind>,
    /// Seed for every shuffle in the game; random when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration with the default order and all patterns.
    pub fn new(
        range: RangeInclusive<Number>,
        players: usize,
        rows: usize,
        cols: usize,
        numbers_per_row: usize,
    ) -> Self {
        Self {
            range_start: *range.start(),
            range_end: *range.end(),
            players,
            rows,
            cols,
            numbers_per_row,
            order: EvaluationOrder::default(),
            patterns: PatternKind::all(),
            seed: None,
        }
    }

    /// The inclusive number range.
    pub fn range(&self) -> RangeInclusive<Number> {
        self.range_start..=self.range_end
    }

    /// How many distinct numbers the range holds.
    pub fn range_size(&self) -> usize {
        if self.range_end < self.range_start {
            0
        } else {
            (self.range_end - self.range_start) as usize + 1
        }
    }

    /// Checks that the parameters form a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`HousieError::Configuration`] describing the first problem.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<TicketLayout, HousieError> {
        let result = self.check();
        if let Err(e) = &result {
            warn!(error = %e, "Rejected game configuration");
        }
        result
    }

    fn check(&self) -> Result<TicketLayout, HousieError> {
        if self.range_end < self.range_start {
            return Err(HousieError::configuration(format!(
                "range end ({}) is below range start ({})",
                self.range_end, self.range_start
            )));
        }
        if self.players < 2 {
            return Err(HousieError::configuration(format!(
                "at least 2 players are required, got {}",
                self.players
            )));
        }

        let layout = TicketLayout::new(self.rows, self.cols, self.numbers_per_row)?;
        let per_ticket = layout.numbers_per_ticket();
        if self.range_size() < per_ticket {
            return Err(HousieError::configuration(format!(
                "range {}..={} holds {} numbers but each ticket needs {}",
                self.range_start,
                self.range_end,
                self.range_size(),
                per_ticket
            )));
        }

        if self.patterns.is_empty() {
            return Err(HousieError::configuration("no patterns to play for"));
        }
        let distinct: BTreeSet<_> = self.patterns.iter().collect();
        if distinct.len() != self.patterns.len() {
            return Err(HousieError::configuration("patterns listed more than once"));
        }
        if let Some(pattern) = self
            .patterns
            .iter()
            .find(|pattern| pattern.min_numbers() > per_ticket)
        {
            return Err(HousieError::configuration(format!(
                "'{}' needs at least {} numbers per ticket, tickets hold {}",
                pattern,
                pattern.min_numbers(),
                per_ticket
            )));
        }

        Ok(layout)
    }
}

impl Default for GameConfig {
    /// A classic 90-ball game for five players on 3×10 tickets.
    fn default() -> Self {
        Self::new(1..=90, 5, 3, 10, 5)
    }
}
