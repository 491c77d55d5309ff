use core::time::Duration;

use super::bitboard::BitBoard;
use super::ship::ShipKind;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Set of board cells, one bit per linear index.
pub type CellSet = BitBoard<u128, BOARD_WIDTH, BOARD_HEIGHT>;

/// Delay before the automated opponent answers a player shot.
pub const REPLY_DELAY_MS: u64 = 700;

/// Upper bound on whole-board regenerations before giving up.
pub const MAX_POPULATE_ATTEMPTS: usize = 1000;

pub const NUM_KINDS: usize = 4;

/// Fleet composition in placement order (most occupied cells first).
pub const FLEET: [(ShipKind, usize); NUM_KINDS] = [
    (ShipKind::Carrier, 2),
    (ShipKind::Battleship, 1),
    (ShipKind::Destroyer, 2),
    (ShipKind::Scout, 3),
];

/// Number of ship instances in a full fleet.
pub const FLEET_INSTANCES: usize = 2 + 1 + 2 + 3;

/// Cells occupied by a full fleet: 2×7 + 1×4 + 2×2 + 3×1.
pub const TOTAL_SHIP_CELLS: usize = 2 * 7 + 4 + 2 * 2 + 3;

/// Tunables for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub reply_delay: Duration,
    pub max_populate_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(REPLY_DELAY_MS),
            max_populate_attempts: MAX_POPULATE_ATTEMPTS,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }
}

/// Split a linear index into `(col, row)`.
#[inline]
pub const fn to_col_row(index: usize) -> (usize, usize) {
    (index % BOARD_WIDTH, index / BOARD_WIDTH)
}

/// Linear index of `(col, row)`.
#[inline]
pub const fn to_index(col: usize, row: usize) -> usize {
    row * BOARD_WIDTH + col
}
