//! Text and JSON rendering of a [`GameView`].

use crate::games::tictactoe::{GameView, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How views are written to stdout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Board grid, status line, and move list.
    #[default]
    Text,
    /// The view serialized as one JSON object per line.
    Json,
}

/// Renders `view` in `format`.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
#[instrument(skip(view))]
pub fn render(
    view: &GameView,
    format: OutputFormat,
    show_coordinates: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(view, show_coordinates)),
        OutputFormat::Json => serde_json::to_string(view),
    }
}

/// Renders `view` as plain text.
///
/// Winning cells are wrapped in brackets; empty cells show their index.
pub fn render_text(view: &GameView, show_coordinates: bool) -> String {
    let mut out = String::new();

    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::from_index(row * 3 + col))
            .map(|pos| {
                let symbol = match view.board.get(pos) {
                    Square::Empty => pos.to_index().to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                let highlighted = view.winning_line.is_some_and(|line| line.contains(pos));
                if highlighted {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(&view.status_text);
    out.push('\n');

    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {:>2}. {}", marker, entry.index, entry.description));
        if show_coordinates
            && let (Some(mark), Some((row, col))) = (entry.mark, entry.location)
        {
            out.push_str(&format!(" ({} at ({}, {}))", mark, row, col));
        }
        out.push('\n');
    }

    out
}
