//! Text layout for banners and the help table.

use fair_rps_core::Outcome;

/// Width of the separator around the HMAC banner (64 hex chars plus label)
pub const BANNER_WIDTH: usize = 70;

pub fn separator(width: usize) -> String {
    "=".repeat(width)
}

/// Numbered menu entries, 1-based like the prompt expects
pub fn menu_items(moves: &[String]) -> Vec<String> {
    let mut items: Vec<String> = moves
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect();
    items.push("?. Help".to_string());
    items.push("0. Exit".to_string());
    items
}

/// Outcome table: one row per user move, one column per computer move.
/// Cells are read from the user's side.
pub fn outcome_table(moves: &[String], table: &[Vec<Outcome>]) -> String {
    let corner = "User \\ PC";
    let cell_width = moves
        .iter()
        .map(|m| m.chars().count())
        .chain([corner.len(), Outcome::Lose.as_str().len()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<w$}", corner, w = cell_width));
    for name in moves {
        out.push_str(&format!(" | {:<w$}", name, w = cell_width));
    }
    out.push('\n');

    let line_width = (cell_width + 3) * (moves.len() + 1) - 3;
    out.push_str(&"-".repeat(line_width));
    out.push('\n');

    for (name, row) in moves.iter().zip(table) {
        out.push_str(&format!("{:<w$}", name, w = cell_width));
        for outcome in row {
            out.push_str(&format!(" | {:<w$}", outcome.as_str(), w = cell_width));
        }
        out.push('\n');
    }
    out
}

pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You win!",
        Outcome::Lose => "You lose!",
        Outcome::Draw => "It's a draw",
    }
}
