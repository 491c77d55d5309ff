//! Common types: error enums, shot outcomes and match sides.

use core::fmt;

use super::bitboard::BitBoardError;
use super::ship::ShipKind;

/// Result of a shot landing on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot found open water.
    Miss,
    /// Shot struck a ship cell that still has intact cells.
    Hit,
    /// Shot struck the last intact cell of a ship.
    Sunk(ShipKind),
}

impl ShotOutcome {
    /// `true` for both hits and sinks.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// The two participants of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The human at the keyboard, who owns the revealed board.
    Player,
    /// The automated opponent, who owns the hidden board.
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Errors returned by `Board` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Index outside `[0, BOARD_SIZE)`.
    InvalidIndex(usize),
    /// Cell was already shot at.
    AlreadyShot(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidIndex(i) => write!(f, "Index {} is out of range", i),
            BoardError::AlreadyShot(i) => write!(f, "Cell {} was already shot at", i),
        }
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { index } => BoardError::InvalidIndex(index),
        }
    }
}

/// Errors raised while laying out a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some part of the shape falls outside the board.
    OutOfBounds,
    /// A set cell of the shape lands on a non-empty cell.
    Occupied,
    /// A set cell of the shape touches an existing ship.
    Touching,
    /// Every candidate anchor was tried without fitting an instance of `kind`.
    Exhausted { kind: ShipKind },
    /// Whole-board regeneration failed `attempts` times in a row.
    RetriesExhausted { attempts: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Occupied => write!(f, "Ship placement overlaps another ship"),
            PlacementError::Touching => write!(f, "Ship placement touches another ship"),
            PlacementError::Exhausted { kind } => {
                write!(f, "No candidate position left for a {}", kind.name())
            }
            PlacementError::RetriesExhausted { attempts } => {
                write!(f, "Unable to lay out a fleet after {} attempts", attempts)
            }
        }
    }
}

/// Reasons a shot is refused by the turn engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    /// It is the other side's turn.
    NotYourTurn(Side),
    /// The match already has a winner.
    GameOver,
    /// No untried cell is left for the opponent.
    NoTargetLeft,
    /// The board refused the shot.
    Board(BoardError),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::NotYourTurn(side) => write!(f, "Not {:?}'s turn", side),
            TurnError::GameOver => write!(f, "Match is already over"),
            TurnError::NoTargetLeft => write!(f, "No untried target left"),
            TurnError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

impl From<BoardError> for TurnError {
    fn from(err: BoardError) -> Self {
        TurnError::Board(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for TurnError {}
