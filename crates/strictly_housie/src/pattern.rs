//! Winnable patterns and their one-shot claim state.

use crate::{Ticket, rules};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{info, instrument};

/// The closed set of win conditions.
///
/// Parsing accepts either the display name or a kebab-case key, ignoring case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PatternKind {
    /// Any five numbers on the ticket.
    #[strum(serialize = "early-five", to_string = "Early Five")]
    #[serde(rename = "early-five")]
    EarlyFive,
    /// Every number in the top row.
    #[strum(serialize = "top-line", to_string = "Top Line")]
    #[serde(rename = "top-line")]
    TopLine,
    /// Every number on the ticket.
    #[strum(serialize = "full-house", to_string = "Full House")]
    #[serde(rename = "full-house")]
    FullHouse,
}

impl PatternKind {
    /// Human-readable name, e.g. `"Top Line"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Evaluates the win condition against a ticket.
    pub fn matches(self, ticket: &Ticket) -> bool {
        match self {
            PatternKind::EarlyFive => rules::is_early_five(ticket),
            PatternKind::TopLine => rules::is_top_line(ticket),
            PatternKind::FullHouse => rules::is_full_house(ticket),
        }
    }

    /// Smallest ticket (in filled slots) on which this pattern can be won.
    pub fn min_numbers(self) -> usize {
        match self {
            PatternKind::EarlyFive => rules::EARLY_FIVE_MARKS,
            PatternKind::TopLine | PatternKind::FullHouse => 1,
        }
    }

    /// Every pattern, in declaration order.
    pub fn all() -> Vec<PatternKind> {
        PatternKind::iter().collect()
    }
}

/// An active pattern within one game.
///
/// `claimed` flips from false to true exactly once and never back, except
/// through [`Pattern::reset`] between games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    kind: PatternKind,
    claimed: bool,
}

impl Pattern {
    /// Creates an unclaimed pattern.
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            claimed: false,
        }
    }

    /// The win condition.
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Display name of the win condition.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Whether a player has already won this pattern.
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// True if the pattern is still open and `ticket` satisfies it.
    pub fn can_be_claimed_by(&self, ticket: &Ticket) -> bool {
        !self.claimed && self.kind.matches(ticket)
    }

    /// Marks the pattern as won.
    #[instrument(skip(self), fields(pattern = %self.kind))]
    pub(crate) fn claim(&mut self) {
        debug_assert!(!self.claimed, "pattern claimed twice");
        self.claimed = true;
        info!("Pattern claimed");
    }

    /// Reopens the pattern for a new game.
    pub(crate) fn reset(&mut self) {
        self.claimed = false;
    }
}
