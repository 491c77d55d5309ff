//! Core rules engine (no_std compatible).
//!
//! Shape catalog, random fleet layout, boards and turn resolution. Nothing
//! here allocates beyond `alloc::vec::Vec` or depends on a runtime, so it can
//! be compiled to WebAssembly for a browser front end.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod placement;
pub mod ship;
pub mod turn;

pub use bitboard::{neighbours, BitBoard, BitBoardError};
pub use board::{Board, Cell, Grid};
pub use common::{BoardError, PlacementError, ShotOutcome, Side, TurnError};
pub use config::*;
pub use placement::{
    can_place, check_placement, place_instance, place_one_random, populate, populate_with_retries,
    shuffle_candidates, CandidateSequence, Layout,
};
pub use ship::{rotations, shape, PlacedShip, Rotation, ShipKind, ShipShape};
pub use turn::{ShotLog, ShotReport, TurnEngine, TurnState};
