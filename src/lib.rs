//! Strictly Housie terminal caller.
//!
//! Wraps the [`strictly_housie`] engine in a line-based console game: settings
//! from defaults, a TOML file, flags or interactive prompts; tickets printed
//! up front; one number called per key press; a summary at the end.
//!
//! # Architecture
//!
//! - **Settings**: layered game settings with table-side validation
//! - **Prompt**: interactive entry of numeric settings
//! - **Keys**: mapping of key presses to caller commands
//! - **Console**: every line the caller prints
//! - **Game**: the draw loop connecting input, session and console

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod game;
mod keys;
mod prompt;
mod settings;

// Crate-level exports - Settings
pub use settings::{HousieSettings, SettingField, SettingsError};

// Crate-level exports - Input
pub use keys::{KEY_TO_CONTINUE, KEY_TO_QUIT, KeyCommand};
pub use prompt::{request_number, request_settings};

// Crate-level exports - Output and game loop
pub use console::Console;
pub use game::{RoundEnd, finish_round, play_round, show_tickets};
