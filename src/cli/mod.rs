//! Terminal front end: coordinate parsing, command parsing and a renderer
//! that prints both boards.

#![cfg(feature = "std")]

pub mod interface;

pub use interface::TerminalRenderer;

use crate::core::{to_col_row, to_index, BOARD_HEIGHT, BOARD_WIDTH};
use crate::render::BoardId;
use crate::session::UiEvent;

/// `"A5"`-style label for a linear index.
pub fn coord_to_string(index: usize) -> String {
    let (col, row) = to_col_row(index);
    format!("{}{}", (b'A' + col as u8) as char, row + 1)
}

/// Parse `"A5"`-style input (column letter, 1-based row) into a linear index.
pub fn parse_coord(input: &str) -> Result<usize, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_WIDTH {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_HEIGHT {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok(to_index(col, row - 1))
}

/// Turn a line typed at the prompt into a UI event.
pub fn parse_command(line: &str) -> Result<UiEvent, String> {
    match line.trim().to_ascii_lowercase().as_str() {
        "start" | "s" => Ok(UiEvent::Start),
        "reset" | "r" => Ok(UiEvent::Reset),
        "quit" | "q" | "exit" => Ok(UiEvent::Quit),
        other => parse_coord(other).map(|index| UiEvent::CellActivated {
            board: BoardId::Opponent,
            index,
        }),
    }
}

pub fn print_help() {
    println!("Commands:");
    println!("  start | s   start a match (a finished match is replaced)");
    println!("  reset | r   lay out new boards and wait for start");
    println!("  quit  | q   leave");
    println!("  <col><row>  fire at the opponent board, e.g. A5, J10");
}
