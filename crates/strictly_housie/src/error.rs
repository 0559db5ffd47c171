//! Error types for the Housie engine.

use crate::Phase;

/// Error raised by engine operations.
///
/// A call that returns an error has not changed any game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HousieError {
    /// The game parameters cannot form a playable game.
    #[display("Invalid configuration: {}", _0)]
    Configuration(String),

    /// More numbers were requested than the pool holds.
    ///
    /// This is a sequencing bug in the caller, not a user error.
    #[display("Number pool exhausted after {} numbers", drawn)]
    ExhaustedPool {
        /// How many numbers had already been taken from the pool.
        drawn: usize,
    },

    /// The operation is not allowed in the current phase.
    #[display("Cannot {} while the game is {}", action, phase)]
    InvalidState {
        /// The rejected operation.
        action: &'static str,
        /// Phase the session was in.
        phase: Phase,
    },

    /// A postcondition failed after a state transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl HousieError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true for errors caused by bad setup parameters.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl std::error::Error for HousieError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = HousieError::configuration("numbers per row exceeds columns");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: numbers per row exceeds columns"
        );

        let err = HousieError::ExhaustedPool { drawn: 90 };
        assert_eq!(err.to_string(), "Number pool exhausted after 90 numbers");

        let err = HousieError::InvalidState {
            action: "draw",
            phase: Phase::Over,
        };
        assert_eq!(err.to_string(), "Cannot draw while the game is over");
    }
}
