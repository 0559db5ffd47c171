//! Strictly Housie - pure Housie (Bingo) game logic.
//!
//! Numbers are drawn one at a time from a shuffled pool and announced to every
//! player. Each player holds a randomly dealt ticket; after every draw the
//! session checks each open pattern against each ticket and awards it to the
//! first player found to satisfy it. The game ends once every pattern has
//! been claimed.
//!
//! # Architecture
//!
//! - **Pool**: exhaustible, independently shuffled bags of numbers
//! - **Ticket**: fixed grids of numbered slots that get marked as numbers are called
//! - **Patterns**: a closed set of win conditions with one-shot claim state
//! - **Dealer**: draws numbers and broadcasts them to subscribed players
//! - **Session**: the `Setup → InProgress → Over` state machine
//!
//! # Example
//!
//! ```
//! use strictly_housie::{GameConfig, Session};
//!
//! # fn main() -> Result<(), strictly_housie::HousieError> {
//! let config = GameConfig::new(1..=90, 3, 3, 10, 5).with_seed(7);
//! let mut session = Session::configure(config)?;
//!
//! while !session.is_over() {
//!     let report = session.advance()?;
//!     for win in report.wins() {
//!         println!("{win}");
//!     }
//! }
//! print!("{}", session.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod contracts;
mod dealer;
mod error;
pub mod invariants;
mod pattern;
mod phases;
mod player;
mod pool;
pub mod rules;
mod session;
mod summary;
mod ticket;

// Crate-level exports - Configuration
pub use config::{EvaluationOrder, GameConfig};

// Crate-level exports - Errors
pub use error::HousieError;

// Crate-level exports - Number pools
pub use pool::{Number, NumberPool, NumberSource, RandomNumberSource};

// Crate-level exports - Tickets
pub use ticket::{Slot, Ticket, TicketLayout, TicketView};

// Crate-level exports - Patterns
pub use pattern::{Pattern, PatternKind};

// Crate-level exports - Dealer and players
pub use dealer::{Dealer, ListenerHandle, NumberListener};
pub use player::{Player, PlayerId};

// Crate-level exports - Session state machine
pub use phases::Phase;
pub use session::{DrawReport, GameSetup, Session, WinEvent};
pub use summary::{PlayerSummary, Summary};
