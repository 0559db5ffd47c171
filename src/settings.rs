//! Game settings for the terminal caller.
//!
//! Settings come from built-in defaults, an optional TOML file and command
//! line overrides, in that order. On top of the engine's own checks the caller
//! enforces the table-side rules of a playable Housie game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_housie::{EvaluationOrder, GameConfig, Number, PatternKind};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

/// Default highest number.
pub const DEFAULT_RANGE_END: Number = 90;
/// Default player count.
pub const DEFAULT_PLAYERS: usize = 5;
/// Default ticket rows.
pub const DEFAULT_ROWS: usize = 3;
/// Default ticket columns.
pub const DEFAULT_COLS: usize = 10;
/// Default numbers per ticket row.
pub const DEFAULT_NUMBERS_PER_ROW: usize = 5;

/// Numbers a ticket needs so Early Five can be won.
const EARLY_FIVE_MINIMUM: usize = 5;

/// A numeric setting that can be prompted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum SettingField {
    /// Lowest number in play.
    #[strum(to_string = "number range start")]
    RangeStart,
    /// Highest number in play.
    #[strum(to_string = "number range end")]
    RangeEnd,
    /// Number of players.
    #[strum(to_string = "number of players")]
    Players,
    /// Ticket rows.
    #[strum(to_string = "number of rows")]
    Rows,
    /// Ticket columns.
    #[strum(to_string = "number of columns")]
    Cols,
    /// Numbers per ticket row.
    #[strum(to_string = "numbers per row")]
    NumbersPerRow,
}

impl SettingField {
    /// Prompt shown when asking for this field.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::RangeStart => ">> Enter the number range start : ",
            Self::RangeEnd => ">> Enter the number range end : ",
            Self::Players => ">> Enter Number of players playing the game : ",
            Self::Rows => ">> Enter Number of rows for the Ticket : ",
            Self::Cols => ">> Enter Number of columns for the Ticket : ",
            Self::NumbersPerRow => ">> Enter numbers per row : ",
        }
    }
}

/// Everything needed to set up a game from the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HousieSettings {
    /// Lowest number in play.
    pub range_start: Number,
    /// Highest number in play.
    pub range_end: Number,
    /// Number of players.
    pub players: usize,
    /// Ticket rows.
    pub rows: usize,
    /// Ticket columns.
    pub cols: usize,
    /// Numbers per ticket row.
    pub numbers_per_row: usize,
    /// Player evaluation order.
    pub order: EvaluationOrder,
    /// Patterns in play.
    pub patterns: Vec<PatternKind>,
    /// Seed for a reproducible game.
    pub seed: Option<u64>,
}

impl Default for HousieSettings {
    fn default() -> Self {
        Self {
            range_start: 1,
            range_end: DEFAULT_RANGE_END,
            players: DEFAULT_PLAYERS,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            numbers_per_row: DEFAULT_NUMBERS_PER_ROW,
            order: EvaluationOrder::default(),
            patterns: PatternKind::all(),
            seed: None,
        }
    }
}

impl HousieSettings {
    /// Loads settings from a TOML file; missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(players = settings.players, "Settings loaded successfully");
        Ok(settings)
    }

    /// Current value of a numeric field.
    pub fn get(&self, field: SettingField) -> usize {
        match field {
            SettingField::RangeStart => self.range_start as usize,
            SettingField::RangeEnd => self.range_end as usize,
            SettingField::Players => self.players,
            SettingField::Rows => self.rows,
            SettingField::Cols => self.cols,
            SettingField::NumbersPerRow => self.numbers_per_row,
        }
    }

    /// Stores a value already accepted by [`HousieSettings::check`].
    pub fn set(&mut self, field: SettingField, value: usize) {
        let number = || Number::try_from(value).unwrap_or(Number::MAX);
        match field {
            SettingField::RangeStart => self.range_start = number(),
            SettingField::RangeEnd => self.range_end = number(),
            SettingField::Players => self.players = value,
            SettingField::Rows => self.rows = value,
            SettingField::Cols => self.cols = value,
            SettingField::NumbersPerRow => self.numbers_per_row = value,
        }
    }

    fn needs_early_five(&self) -> bool {
        self.patterns.contains(&PatternKind::EarlyFive)
    }

    fn range_size(&self) -> usize {
        (self.range_end as usize + 1).saturating_sub(self.range_start as usize)
    }

    /// Checks a candidate value for `field` against the fields before it.
    ///
    /// Fields are validated in declaration order, so each check may rely on
    /// the values of earlier fields.
    pub fn check(&self, field: SettingField, value: usize) -> Result<(), String> {
        let early_five = self.needs_early_five();
        let valid = match field {
            SettingField::RangeStart => value >= 1 && value <= Number::MAX as usize,
            SettingField::RangeEnd => {
                value <= Number::MAX as usize
                    && value + 1 >= self.range_start as usize + EARLY_FIVE_MINIMUM
            }
            SettingField::Players => value > 1,
            SettingField::Rows => value > 0 && value <= self.range_size(),
            SettingField::Cols => {
                let cells = value.saturating_mul(self.rows);
                value > 0
                    && (!early_five
                        || cells > EARLY_FIVE_MINIMUM
                        || (self.rows == 1 && value >= EARLY_FIVE_MINIMUM))
            }
            SettingField::NumbersPerRow => {
                let per_ticket = value.saturating_mul(self.rows);
                value > 0
                    && value <= self.cols
                    && per_ticket <= self.range_size()
                    && (!early_five || per_ticket >= EARLY_FIVE_MINIMUM)
            }
        };
        if valid {
            Ok(())
        } else {
            Err(self.rule(field))
        }
    }

    fn rule(&self, field: SettingField) -> String {
        let min_cols = if self.rows == 1 {
            EARLY_FIVE_MINIMUM
        } else {
            (EARLY_FIVE_MINIMUM + 1).div_ceil(self.rows.max(1))
        };
        let min_per_row = EARLY_FIVE_MINIMUM.div_ceil(self.rows.max(1));
        let max_per_row = self.cols.min(self.range_size() / self.rows.max(1));
        match field {
            SettingField::RangeStart => "Invalid range start, please enter a number >= 1".into(),
            SettingField::RangeEnd => format!(
                "Invalid number range, please enter a number >= {}",
                self.range_start as usize + EARLY_FIVE_MINIMUM - 1
            ),
            SettingField::Players => "Invalid number of players, please enter a number > 1".into(),
            SettingField::Rows => format!(
                "Invalid number of rows, please enter a number where 0 < number <= {}",
                self.range_size()
            ),
            SettingField::Cols => format!(
                "Invalid number of columns, please enter a number where number >= {}",
                min_cols
            ),
            SettingField::NumbersPerRow => format!(
                "Invalid numbers per row, please enter a number where {} <= number <= {}",
                min_per_row, max_per_row
            ),
        }
    }

    /// Applies every table-side rule to the current values.
    ///
    /// # Errors
    ///
    /// Returns the first rule the settings break.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), SettingsError> {
        for field in SettingField::iter() {
            self.check(field, self.get(field))
                .map_err(|message| SettingsError::new(format!("{}: {}", field, message)))?;
        }
        Ok(())
    }

    /// Engine configuration for these settings.
    pub fn to_game_config(&self) -> GameConfig {
        let config = GameConfig::new(
            self.range_start..=self.range_end,
            self.players,
            self.rows,
            self.cols,
            self.numbers_per_row,
        )
        .with_order(self.order)
        .with_patterns(self.patterns.clone());
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_every_rule() {
        assert!(HousieSettings::default().validate().is_ok());
    }

    #[test]
    fn test_single_row_needs_five_columns() {
        let settings = HousieSettings {
            rows: 1,
            ..HousieSettings::default()
        };
        assert!(settings.check(SettingField::Cols, 4).is_err());
        assert!(settings.check(SettingField::Cols, 5).is_ok());
    }

    #[test]
    fn test_two_rows_need_six_cells() {
        let settings = HousieSettings {
            rows: 2,
            ..HousieSettings::default()
        };
        assert!(settings.check(SettingField::Cols, 2).is_err());
        assert!(settings.check(SettingField::Cols, 3).is_ok());
    }

    #[test]
    fn test_numbers_per_row_bounds() {
        let settings = HousieSettings {
            range_end: 10,
            rows: 2,
            cols: 8,
            ..HousieSettings::default()
        };
        assert!(settings.check(SettingField::NumbersPerRow, 2).is_err());
        assert!(settings.check(SettingField::NumbersPerRow, 3).is_ok());
        assert!(settings.check(SettingField::NumbersPerRow, 5).is_ok());
        assert!(settings.check(SettingField::NumbersPerRow, 6).is_err());
        assert_eq!(
            settings.check(SettingField::NumbersPerRow, 9).unwrap_err(),
            "Invalid numbers per row, please enter a number where 3 <= number <= 5"
        );
    }

    #[test]
    fn test_without_early_five_small_tickets_pass() {
        let settings = HousieSettings {
            range_end: 10,
            rows: 1,
            cols: 2,
            numbers_per_row: 2,
            patterns: vec![PatternKind::TopLine, PatternKind::FullHouse],
            ..HousieSettings::default()
        };
        assert!(settings.validate().is_ok());
        assert!(settings.to_game_config().validate().is_ok());
    }

    #[test]
    fn test_validate_names_the_field() {
        let settings = HousieSettings {
            players: 1,
            ..HousieSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.message.starts_with("number of players:"));
    }

    #[test]
    fn test_game_config_carries_everything() {
        let settings = HousieSettings {
            order: EvaluationOrder::Stable,
            seed: Some(3),
            ..HousieSettings::default()
        };
        let config = settings.to_game_config();
        assert_eq!(config.range(), 1..=90);
        assert_eq!(*config.order(), EvaluationOrder::Stable);
        assert_eq!(*config.seed(), Some(3));
    }
}
