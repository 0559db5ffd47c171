//! Strictly Housie - terminal caller
//!
//! Deals tickets, calls numbers on key press and announces winners.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{self, Write};
use strictly_housie::GameSetup;
use strictly_housie_cli::{
    Console, HousieSettings, RoundEnd, finish_round, play_round, request_settings, show_tickets,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let mut settings = match &cli.config {
        Some(path) => HousieSettings::from_file(path)?,
        None => HousieSettings::default(),
    };
    cli.apply(&mut settings);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut console = Console::new(io::stdout().lock());
    console.intro()?;

    if cli.interactive {
        match request_settings(&mut input, console.writer(), settings)? {
            Some(entered) => settings = entered,
            None => return Ok(()),
        }
    }
    settings.validate()?;

    run_games(&cli, &settings, &mut input, &mut console)
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

#[instrument(skip_all, fields(rounds = cli.rounds))]
fn run_games<R: io::BufRead, W: Write>(
    cli: &Cli,
    settings: &HousieSettings,
    input: &mut R,
    console: &mut Console<W>,
) -> Result<()> {
    let setup = GameSetup::new(settings.to_game_config()).context("Failed to set up the game")?;
    show_tickets(console, settings.players, |id| setup.ticket_view(id))?;
    let mut session = setup.start();

    for round in 1..=cli.rounds.max(1) {
        if round > 1 {
            session.reset().context("Failed to start the next round")?;
            info!(round, "Starting next round");
            show_tickets(console, session.player_count(), |id| session.ticket_view(id))?;
        }

        let end = play_round(&mut session, input, console, cli.auto)?;
        finish_round(&session, end, console, cli.json)?;

        if end == RoundEnd::Quit {
            break;
        }
    }
    Ok(())
}
