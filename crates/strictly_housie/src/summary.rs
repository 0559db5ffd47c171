//! End-of-game win projection.

use crate::{PatternKind, PlayerId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What one player has won.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// The player.
    player: PlayerId,
    /// Claimed patterns; empty means nothing was won.
    won: BTreeSet<PatternKind>,
}

impl PlayerSummary {
    /// Creates a summary line.
    pub fn new(player: PlayerId, won: BTreeSet<PatternKind>) -> Self {
        Self { player, won }
    }

    /// True if the player claimed no pattern.
    pub fn won_nothing(&self) -> bool {
        self.won.is_empty()
    }
}

impl std::fmt::Display for PlayerSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player#{} : ", self.player)?;
        if self.won_nothing() {
            return write!(f, "Nothing");
        }
        let names: Vec<&str> = self.won.iter().map(|pattern| pattern.name()).collect();
        write!(f, "{}", names.join(" and "))
    }
}

/// Per-player wins in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    players: Vec<PlayerSummary>,
}

impl Summary {
    /// Builds a summary, sorting lines by player id.
    pub fn new(mut players: Vec<PlayerSummary>) -> Self {
        players.sort_by_key(|line| line.player);
        Self { players }
    }

    /// Lines in ascending id order.
    pub fn players(&self) -> &[PlayerSummary] {
        &self.players
    }

    /// The player holding `pattern`, if anyone claimed it.
    pub fn winner_of(&self, pattern: PatternKind) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|line| line.won.contains(&pattern))
            .map(|line| line.player)
    }

    /// Every claimed pattern across all players.
    pub fn claimed(&self) -> impl Iterator<Item = PatternKind> + '_ {
        self.players.iter().flat_map(|line| line.won.iter().copied())
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.players {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines() {
        let summary = Summary::new(vec![
            PlayerSummary::new(2, BTreeSet::from([PatternKind::EarlyFive])),
            PlayerSummary::new(3, BTreeSet::new()),
            PlayerSummary::new(
                1,
                BTreeSet::from([PatternKind::FullHouse, PatternKind::TopLine]),
            ),
        ]);

        assert_eq!(
            summary.to_string(),
            "Player#1 : Top Line and Full House\n\
             Player#2 : Early Five\n\
             Player#3 : Nothing\n"
        );
        assert_eq!(summary.winner_of(PatternKind::EarlyFive), Some(2));
        assert_eq!(summary.claimed().count(), 3);
    }
}
