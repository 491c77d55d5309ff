//! Outbound boundary to whatever draws the boards.
//!
//! The rules core never draws anything itself. It tells a [`Renderer`] which
//! cell changed, what the status line says and which board accepts input.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::core::Cell;

/// Which of the two boards a command refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardId {
    /// The player's own board, ships revealed.
    Player,
    /// The opponent's board, ships hidden. The player fires at this one.
    Opponent,
}

/// How a single cell should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum VisualState {
    Hidden,
    ShipRevealed,
    Hit,
    Miss,
}

/// Visual state of `cell`; intact ships are drawn only when `reveal` is set.
pub fn visual_state(cell: Cell, reveal: bool) -> VisualState {
    match cell {
        Cell::Ship if reveal => VisualState::ShipRevealed,
        Cell::Empty | Cell::Ship => VisualState::Hidden,
        Cell::Hit => VisualState::Hit,
        Cell::Miss => VisualState::Miss,
    }
}

/// Status line texts.
pub mod status {
    pub const READY: &str = "Click 'Start Game' to begin";
    pub const STARTED: &str = "Game started! Your turn!";
    pub const PLAYER_HIT: &str = "Hit!";
    pub const PLAYER_SUNK: &str = "You sank a ship!";
    pub const PLAYER_MISS: &str = "Miss!";
    pub const OPPONENT_HIT: &str = "Computer hit your ship! - Your turn!";
    pub const OPPONENT_MISS: &str = "Computer missed! - Your turn!";
    pub const PLAYER_WON: &str = "🎉 You win!";
    pub const PLAYER_LOST: &str = "💥 You lose!";
}

/// Sink for everything the core wants shown.
pub trait Renderer {
    fn render_cell(&mut self, board: BoardId, index: usize, state: VisualState);
    fn render_status(&mut self, message: &str);
    fn set_input_enabled(&mut self, board: BoardId, enabled: bool);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render_cell(&mut self, board: BoardId, index: usize, state: VisualState) {
        (**self).render_cell(board, index, state)
    }

    fn render_status(&mut self, message: &str) {
        (**self).render_status(message)
    }

    fn set_input_enabled(&mut self, board: BoardId, enabled: bool) {
        (**self).set_input_enabled(board, enabled)
    }
}

/// One call made on a [`Renderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderCommand {
    Cell {
        board: BoardId,
        index: usize,
        state: VisualState,
    },
    Status(String),
    Input {
        board: BoardId,
        enabled: bool,
    },
}

/// Renderer that keeps every command it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drain recorded commands.
    pub fn take(&mut self) -> Vec<RenderCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Most recent status text.
    pub fn last_status(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Status(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Most recent visual state drawn for a cell.
    pub fn cell(&self, board: BoardId, index: usize) -> Option<VisualState> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Cell {
                board: b,
                index: i,
                state,
            } if *b == board && *i == index => Some(*state),
            _ => None,
        })
    }

    /// Most recent input flag for a board.
    pub fn input_enabled(&self, board: BoardId) -> Option<bool> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Input { board: b, enabled } if *b == board => Some(*enabled),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn render_cell(&mut self, board: BoardId, index: usize, state: VisualState) {
        self.commands.push(RenderCommand::Cell {
            board,
            index,
            state,
        });
    }

    fn render_status(&mut self, message: &str) {
        self.commands.push(RenderCommand::Status(message.to_string()));
    }

    fn set_input_enabled(&mut self, board: BoardId, enabled: bool) {
        self.commands.push(RenderCommand::Input { board, enabled });
    }
}
