//! Text output for a game played in the terminal.

use crate::keys::{KEY_TO_CONTINUE, KEY_TO_QUIT};
use std::io::{self, Write};
use strictly_housie::{Number, PlayerId, Summary, TicketView, WinEvent};

const RULE: &str = "======================";

/// Writes game announcements to any output stream.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    /// Wraps an output stream.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// The underlying stream, for prompts that write directly.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the console and returns the stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Opening banner.
    pub fn intro(&mut self) -> io::Result<()> {
        writeln!(self.out, "**** Lets Play Housie *****")?;
        writeln!(
            self.out,
            "Press '{}' or Enter to call the next number, '{}' to quit.",
            KEY_TO_CONTINUE, KEY_TO_QUIT
        )
    }

    /// Prints one player's ticket.
    pub fn ticket(&mut self, player: PlayerId, view: &TicketView) -> io::Result<()> {
        writeln!(self.out, "Player#{} ticket:", player)?;
        writeln!(self.out, "{}", view)
    }

    /// Prompt shown before waiting for a key.
    pub fn await_key(&mut self) -> io::Result<()> {
        write!(self.out, ">> ")?;
        self.out.flush()
    }

    /// Announces a called number.
    pub fn called(&mut self, number: Number) -> io::Result<()> {
        writeln!(self.out, "Next number is: {}", number)
    }

    /// Announces a claimed pattern.
    pub fn win(&mut self, event: &WinEvent) -> io::Result<()> {
        writeln!(self.out, "We have a winner: {}", event)
    }

    /// Complains about an unknown key.
    pub fn invalid_key(&mut self) -> io::Result<()> {
        writeln!(self.out, "Invalid key press.")
    }

    /// Closing banner with one line per player.
    pub fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out, "***** Game Over *****")?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "Summary:")?;
        write!(self.out, "{}", summary)?;
        writeln!(self.out, "{}", RULE)
    }

    /// Closing summary as a single JSON document.
    pub fn summary_json(&mut self, summary: &Summary) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, summary)?;
        writeln!(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use strictly_housie::{PatternKind, PlayerSummary};

    fn render(f: impl FnOnce(&mut Console<Vec<u8>>) -> io::Result<()>) -> String {
        let mut console = Console::new(Vec::new());
        f(&mut console).expect("in-memory io");
        String::from_utf8(console.into_inner()).expect("utf8")
    }

    #[test]
    fn test_win_line() {
        let text = render(|c| c.win(&WinEvent::new(2, PatternKind::TopLine)));
        assert_eq!(text, "We have a winner: Player#2 has won 'Top Line'\n");
    }

    #[test]
    fn test_summary_banner() {
        let summary = Summary::new(vec![
            PlayerSummary::new(2, BTreeSet::new()),
            PlayerSummary::new(1, [PatternKind::EarlyFive].into_iter().collect()),
        ]);
        let text = render(|c| c.summary(&summary));
        assert_eq!(
            text,
            "***** Game Over *****\n\
             ======================\n\
             Summary:\n\
             Player#1 : Early Five\n\
             Player#2 : Nothing\n\
             ======================\n"
        );
    }

    #[test]
    fn test_json_summary_parses() {
        let summary = Summary::new(vec![PlayerSummary::new(1, BTreeSet::new())]);
        let text = render(|c| c.summary_json(&summary));
        let parsed: Summary = serde_json::from_str(&text).expect("json");
        assert_eq!(parsed, summary);
    }
}
