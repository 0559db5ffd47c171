//! Interactive prompts for game settings.

use crate::keys::KEY_TO_QUIT;
use crate::settings::{HousieSettings, SettingField};
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Asks for a number until the answer passes `check`.
///
/// An empty line takes `default`. Returns `None` when the user enters the quit
/// key or input ends.
pub fn request_number<R, W, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: usize,
    check: F,
) -> io::Result<Option<usize>>
where
    R: BufRead,
    W: Write,
    F: Fn(usize) -> Result<(), String>,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim();

        if answer.eq_ignore_ascii_case(KEY_TO_QUIT) {
            return Ok(None);
        }
        if answer.is_empty() {
            writeln!(output, "No input detected, defaulting to {}", default)?;
            return Ok(Some(default));
        }

        match answer.parse::<usize>() {
            Ok(value) => match check(value) {
                Ok(()) => return Ok(Some(value)),
                Err(message) => writeln!(output, "{}", message)?,
            },
            Err(_) => writeln!(output, "Invalid input entered, please enter a valid number.")?,
        }
    }
}

/// Walks through every numeric setting, starting from `base`.
///
/// Each field's default is its value in `base`. A default that no longer
/// fits the earlier answers is still offered; it is checked again by
/// [`HousieSettings::validate`] before the game starts.
#[instrument(skip_all)]
pub fn request_settings<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    base: HousieSettings,
) -> io::Result<Option<HousieSettings>> {
    writeln!(
        output,
        "Enter the game settings. Press Enter to keep the default or '{}' to quit.",
        KEY_TO_QUIT
    )?;

    let mut settings = base;
    for field in SettingField::iter() {
        let default = settings.get(field);
        let current = settings.clone();
        let Some(value) =
            request_number(input, output, field.prompt(), default, |v| current.check(field, v))?
        else {
            debug!(%field, "Settings prompt abandoned");
            return Ok(None);
        };
        settings.set(field, value);
    }
    Ok(Some(settings))
}
