//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardId, GameController, MatchConfig, Phase, RecordingRenderer, Renderer, Side, TurnState,
    VisualState,
};

#[cfg(feature = "std")]
pub use crate::{cli::TerminalRenderer, run_session, UiEvent};
