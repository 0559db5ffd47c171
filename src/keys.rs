//! Key presses accepted while a game is running.

/// Key that calls the next number.
pub const KEY_TO_CONTINUE: &str = "N";
/// Key that ends the game early.
pub const KEY_TO_QUIT: &str = "Q";

/// What the caller should do with a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum KeyCommand {
    /// Call the next number.
    #[strum(to_string = "next number")]
    Call,
    /// Stop the game.
    #[strum(to_string = "quit")]
    Quit,
}

impl KeyCommand {
    /// Maps a line of input to a command.
    ///
    /// An empty line calls the next number. Returns `None` for any other key.
    pub fn from_key(line: &str) -> Option<Self> {
        let key = line.trim();
        if key.is_empty() || key.eq_ignore_ascii_case(KEY_TO_CONTINUE) {
            Some(Self::Call)
        } else if key.eq_ignore_ascii_case(KEY_TO_QUIT) {
            Some(Self::Quit)
        } else {
            None
        }
    }
}
