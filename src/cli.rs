//! Command-line interface for the Housie caller.

use clap::Parser;
use std::path::PathBuf;
use strictly_housie::{EvaluationOrder, Number, PatternKind};
use strictly_housie_cli::HousieSettings;

/// Strictly Housie - call a game of Housie in the terminal
#[derive(Parser, Debug)]
#[command(name = "housie")]
#[command(about = "Call a game of Housie (Bingo) in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML); flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lowest number in play
    #[arg(long)]
    pub range_start: Option<Number>,

    /// Highest number in play
    #[arg(long)]
    pub range_end: Option<Number>,

    /// Number of players
    #[arg(short, long)]
    pub players: Option<usize>,

    /// Ticket rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Ticket columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Numbers per ticket row
    #[arg(long)]
    pub numbers_per_row: Option<usize>,

    /// Player evaluation order (fair or stable)
    #[arg(long)]
    pub order: Option<EvaluationOrder>,

    /// Patterns in play, comma separated (early-five, top-line, full-house)
    #[arg(long = "pattern", value_delimiter = ',')]
    pub patterns: Vec<PatternKind>,

    /// Seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Prompt for the numeric settings before starting
    #[arg(short, long)]
    pub interactive: bool,

    /// Call every number without waiting for key presses
    #[arg(long)]
    pub auto: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Number of games to play with the same settings
    #[arg(long, default_value = "1")]
    pub rounds: usize,
}

impl Cli {
    /// Overrides `settings` with every flag that was given.
    pub fn apply(&self, settings: &mut HousieSettings) {
        if let Some(value) = self.range_start {
            settings.range_start = value;
        }
        if let Some(value) = self.range_end {
            settings.range_end = value;
        }
        if let Some(value) = self.players {
            settings.players = value;
        }
        if let Some(value) = self.rows {
            settings.rows = value;
        }
        if let Some(value) = self.cols {
            settings.cols = value;
        }
        if let Some(value) = self.numbers_per_row {
            settings.numbers_per_row = value;
        }
        if let Some(order) = self.order {
            settings.order = order;
        }
        if !self.patterns.is_empty() {
            settings.patterns = self.patterns.clone();
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}
