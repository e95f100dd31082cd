//! Line-oriented frontend: read commands, dispatch, print the view.

use crate::config::AppConfig;
use crate::render::render;
use crate::session::{Event, Session};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  play <cell>   place the next mark (cell 0-8 or a name like 'center')
  jump <move>   go back or forward to move N (0 is game start)
  toggle        flip the move list order
  restart       start a new game
  show          print the board again
  help          show this message
  quit          exit";

/// What a single line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Event(Event),
    Show,
    Help,
    Quit,
    Blank,
}

fn classify(line: &str) -> Result<Line, crate::session::ParseEventError> {
    match line.trim().to_lowercase().as_str() {
        "" => Ok(Line::Blank),
        "show" | "s" => Ok(Line::Show),
        "help" | "h" | "?" => Ok(Line::Help),
        "quit" | "q" | "exit" => Ok(Line::Quit),
        _ => line.parse().map(Line::Event),
    }
}

/// Prints the current view of `session` to `output`.
fn print_view<W: Write>(session: &Session, config: &AppConfig, output: &mut W) -> Result<()> {
    let rendered = render(&session.view(), *config.format(), *config.show_coordinates())
        .context("Failed to render view")?;
    writeln!(output, "{}", rendered).context("Failed to write view")?;
    Ok(())
}

/// Runs the interactive loop until `quit` or end of input.
///
/// Bad commands and out-of-range jumps print an error line and the loop
/// continues.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    config: &AppConfig,
    input: R,
    mut output: W,
) -> Result<()> {
    info!("Starting interactive session");
    print_view(session, config, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        debug!(%line, "Read command");

        match classify(&line) {
            Ok(Line::Blank) => continue,
            Ok(Line::Quit) => break,
            Ok(Line::Help) => writeln!(output, "{}", HELP)?,
            Ok(Line::Show) => print_view(session, config, &mut output)?,
            Ok(Line::Event(event)) => match session.dispatch(event) {
                Ok(_) => print_view(session, config, &mut output)?,
                Err(error) => {
                    warn!(%error, "Rejected jump");
                    writeln!(output, "error: {}", error)?;
                }
            },
            Err(error) => writeln!(output, "error: {} (type 'help')", error)?,
        }
    }

    info!(moves = session.game().len() - 1, "Session ended");
    Ok(())
}

/// Applies `commands` in order and prints the final view.
///
/// # Errors
///
/// Fails on the first command that does not parse or jumps out of range.
#[instrument(skip(session, config, output))]
pub fn replay<W: Write>(
    session: &mut Session,
    config: &AppConfig,
    commands: &[String],
    mut output: W,
) -> Result<()> {
    for command in commands {
        let event: Event = command
            .parse()
            .with_context(|| format!("Invalid command '{}'", command))?;
        session
            .dispatch(event)
            .with_context(|| format!("Command '{}' failed", command))?;
    }
    print_view(session, config, &mut output)
}
