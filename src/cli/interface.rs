#![cfg(feature = "std")]

//! Board printing for the terminal front end.

use std::io::{self, Stdout, Write};

use log::warn;

use crate::core::{BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH};
use crate::render::{BoardId, Renderer, VisualState};

/// Renderer that mirrors both boards and reprints them whenever the status
/// line changes. Cell updates alone are buffered.
pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    player: [VisualState; BOARD_SIZE],
    opponent: [VisualState; BOARD_SIZE],
    input_enabled: bool,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            player: [VisualState::Hidden; BOARD_SIZE],
            opponent: [VisualState::Hidden; BOARD_SIZE],
            input_enabled: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn symbol(state: VisualState) -> char {
        match state {
            VisualState::Hidden => '.',
            VisualState::ShipRevealed => 'S',
            VisualState::Hit => 'X',
            VisualState::Miss => 'o',
        }
    }

    fn write_boards(&mut self, status: &str) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out)?;
        write!(out, "      Opponent board       ")?;
        writeln!(out, "      Your board")?;
        for _ in 0..2 {
            write!(out, "    ")?;
            for c in 0..BOARD_WIDTH {
                write!(out, " {}", (b'A' + c as u8) as char)?;
            }
            write!(out, "  ")?;
        }
        writeln!(out)?;
        for r in 0..BOARD_HEIGHT {
            for board in [&self.opponent, &self.player] {
                write!(out, "  {:2}", r + 1)?;
                for c in 0..BOARD_WIDTH {
                    write!(out, " {}", Self::symbol(board[r * BOARD_WIDTH + c]))?;
                }
                write!(out, "  ")?;
            }
            writeln!(out)?;
        }
        writeln!(out, "    Legend: S=Ship  X=Hit  o=Miss  .=Water/Unknown")?;
        writeln!(out, "\n  {}", status)?;
        if self.input_enabled {
            write!(out, "> ")?;
        }
        out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_cell(&mut self, board: BoardId, index: usize, state: VisualState) {
        let cells = match board {
            BoardId::Player => &mut self.player,
            BoardId::Opponent => &mut self.opponent,
        };
        if let Some(cell) = cells.get_mut(index) {
            *cell = state;
        }
    }

    fn render_status(&mut self, message: &str) {
        if let Err(e) = self.write_boards(message) {
            warn!("failed to draw boards: {}", e);
        }
    }

    fn set_input_enabled(&mut self, board: BoardId, enabled: bool) {
        if board == BoardId::Opponent {
            self.input_enabled = enabled;
        }
    }
}
