//! Lifecycle phases of a Housie session.

use serde::{Deserialize, Serialize};

/// Phase of a game session.
///
/// A session moves strictly forward: `Setup → InProgress → Over`.
/// Only [`Session::reset`](crate::Session::reset) returns an `Over`
/// session to `InProgress`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum Phase {
    /// Tickets, dealer and patterns are being assembled.
    #[strum(to_string = "setting up")]
    Setup,
    /// Numbers are being called.
    #[strum(to_string = "in progress")]
    InProgress,
    /// Every active pattern has been claimed.
    #[strum(to_string = "over")]
    Over,
}

impl Phase {
    /// Returns true once no further draws may happen.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Over)
    }
}
