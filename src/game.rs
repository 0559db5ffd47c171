//! Runs a session against a line-based input stream.

use crate::console::Console;
use crate::keys::KeyCommand;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_housie::{PlayerId, Session, TicketView};
use tracing::{debug, info, instrument};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RoundEnd {
    /// Every pattern was claimed.
    #[strum(to_string = "finished")]
    Finished,
    /// The player pressed the quit key or input ran out.
    #[strum(to_string = "quit")]
    Quit,
}

/// Prints the ticket of every player from 1 to `players`.
pub fn show_tickets<W, F>(console: &mut Console<W>, players: usize, view: F) -> Result<()>
where
    W: Write,
    F: Fn(PlayerId) -> Option<TicketView>,
{
    for player in 1..=players {
        if let Some(ticket) = view(player) {
            console.ticket(player, &ticket)?;
        }
    }
    Ok(())
}

/// Calls numbers until the game is over or the player quits.
///
/// With `auto` set, numbers are called without waiting for input.
#[instrument(skip_all, fields(auto = auto))]
pub fn play_round<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    console: &mut Console<W>,
    auto: bool,
) -> Result<RoundEnd> {
    let mut line = String::new();
    while !session.is_over() {
        let command = if auto {
            KeyCommand::Call
        } else {
            console.await_key()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Ok(RoundEnd::Quit);
            }
            match KeyCommand::from_key(&line) {
                Some(command) => command,
                None => {
                    console.invalid_key()?;
                    continue;
                }
            }
        };

        match command {
            KeyCommand::Call => {
                let report = session.advance().context("Failed to call the next number")?;
                console.called(*report.number())?;
                for win in report.wins() {
                    console.win(win)?;
                }
            }
            KeyCommand::Quit => {
                info!(called = session.called().len(), "Game stopped by player");
                return Ok(RoundEnd::Quit);
            }
        }
    }
    Ok(RoundEnd::Finished)
}

/// Prints the summary of a finished round; a quit round prints nothing.
pub fn finish_round<W: Write>(
    session: &Session,
    end: RoundEnd,
    console: &mut Console<W>,
    json: bool,
) -> Result<()> {
    if end == RoundEnd::Quit {
        debug!("Round quit, skipping summary");
        return Ok(());
    }
    let summary = session.summary();
    if json {
        console.summary_json(&summary)?;
    } else {
        console.summary(&summary)?;
    }
    Ok(())
}
