//! Random fleet layout.
//!
//! Anchors are drawn from a shuffled candidate sequence. Each attempt picks
//! a random rotation and tries the anchor under the cursor; a rejected anchor
//! moves the cursor on, an accepted one is consumed. Kinds are laid out
//! largest first, and a ship may never touch another one, diagonals included.

use alloc::vec::Vec;

use log::debug;
use rand::{seq::SliceRandom, Rng};

use super::bitboard::neighbours;
use super::board::{Cell, Grid};
use super::common::PlacementError;
use super::config::{to_col_row, CellSet, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH, FLEET};
use super::ship::{shape, PlacedShip, Rotation, ShipKind, ShipShape};

/// Every linear index of the board, uniformly shuffled.
pub fn shuffle_candidates<R: Rng + ?Sized>(rng: &mut R) -> [usize; BOARD_SIZE] {
    let mut order: [usize; BOARD_SIZE] = core::array::from_fn(|i| i);
    order.shuffle(rng);
    order
}

/// Stateful list of not-yet-used anchor positions.
#[derive(Debug, Clone)]
pub struct CandidateSequence {
    order: [usize; BOARD_SIZE],
    consumed: [bool; BOARD_SIZE],
    cursor: usize,
}

impl CandidateSequence {
    /// A freshly shuffled sequence with the cursor at the start.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_order(shuffle_candidates(rng))
    }

    /// A sequence visiting anchors in the given order.
    pub fn from_order(order: [usize; BOARD_SIZE]) -> Self {
        Self {
            order,
            consumed: [false; BOARD_SIZE],
            cursor: 0,
        }
    }

    /// Anchor under the cursor, skipping consumed entries.
    /// `None` once every entry has been consumed.
    pub fn current(&mut self) -> Option<usize> {
        for _ in 0..BOARD_SIZE {
            if !self.consumed[self.cursor] {
                return Some(self.order[self.cursor]);
            }
            self.advance();
        }
        None
    }

    /// Move past the current anchor without consuming it. Wraps around.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % BOARD_SIZE;
    }

    /// Mark the current anchor as used.
    pub fn consume(&mut self) {
        self.consumed[self.cursor] = true;
    }

    /// Anchors not consumed yet.
    pub fn remaining(&self) -> usize {
        self.consumed.iter().filter(|c| !**c).count()
    }
}

/// Validate `shape` anchored at `(left, top)` and return the cells it covers.
pub fn check_placement(
    grid: &Grid,
    shape: &ShipShape,
    left: usize,
    top: usize,
) -> Result<CellSet, PlacementError> {
    let cells = shape
        .project(left, top)
        .ok_or(PlacementError::OutOfBounds)?;
    for index in cells.iter_ones() {
        if grid.get(index) != Some(Cell::Empty) {
            return Err(PlacementError::Occupied);
        }
        if neighbours::<BOARD_WIDTH, BOARD_HEIGHT>(index).any(|n| grid.get(n) == Some(Cell::Ship)) {
            return Err(PlacementError::Touching);
        }
    }
    Ok(cells)
}

/// `true` iff every set cell of `shape` at `(left, top)` is on the board,
/// empty, and not next to an existing ship.
pub fn can_place(grid: &Grid, shape: &ShipShape, left: usize, top: usize) -> bool {
    check_placement(grid, shape, left, top).is_ok()
}

/// A grid under construction together with the ships laid on it.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    grid: Grid,
    ships: Vec<PlacedShip>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    pub fn into_parts(self) -> (Grid, Vec<PlacedShip>) {
        (self.grid, self.ships)
    }

    /// Lay `kind` at `rotation` with its top-left corner on `(left, top)`.
    pub fn place(
        &mut self,
        kind: ShipKind,
        rotation: Rotation,
        left: usize,
        top: usize,
    ) -> Result<PlacedShip, PlacementError> {
        let cells = check_placement(&self.grid, &shape(kind, rotation), left, top)?;
        for index in cells.iter_ones() {
            self.grid.set(index, Cell::Ship);
        }
        let ship = PlacedShip::new(kind, rotation, left, top, cells);
        self.ships.push(ship);
        Ok(ship)
    }
}

/// One placement attempt for `kind` at the anchor under the cursor.
///
/// On success the anchor is consumed and the placed ship returned. On
/// failure the cursor moves on and `None` is returned; callers retry.
pub fn place_one_random<R: Rng + ?Sized>(
    layout: &mut Layout,
    candidates: &mut CandidateSequence,
    kind: ShipKind,
    rng: &mut R,
) -> Option<PlacedShip> {
    let rotation = Rotation::from_ordinal(rng.random_range(0..4));
    let anchor = candidates.current()?;
    let (left, top) = to_col_row(anchor);
    match layout.place(kind, rotation, left, top) {
        Ok(ship) => {
            candidates.consume();
            Some(ship)
        }
        Err(_) => {
            candidates.advance();
            None
        }
    }
}

/// Lay out a full fleet on an empty grid.
///
/// Fails with `Exhausted` when an instance cannot be fitted after trying
/// `BOARD_SIZE` anchors in a row; a partial layout is never returned.
pub fn populate<R: Rng + ?Sized>(rng: &mut R) -> Result<Layout, PlacementError> {
    let mut layout = Layout::new();
    let mut candidates = CandidateSequence::shuffled(rng);

    for &(kind, count) in FLEET.iter() {
        for _ in 0..count {
            place_instance(&mut layout, &mut candidates, kind, rng)?;
        }
    }
    Ok(layout)
}

/// Retry [`place_one_random`] until one `kind` is placed, giving up with
/// `Exhausted` after `BOARD_SIZE` failures in a row.
pub fn place_instance<R: Rng + ?Sized>(
    layout: &mut Layout,
    candidates: &mut CandidateSequence,
    kind: ShipKind,
    rng: &mut R,
) -> Result<PlacedShip, PlacementError> {
    for _ in 0..BOARD_SIZE {
        if let Some(ship) = place_one_random(layout, candidates, kind, rng) {
            return Ok(ship);
        }
    }
    debug!("no anchor left for {} after {} tries", kind.name(), BOARD_SIZE);
    Err(PlacementError::Exhausted { kind })
}

/// Call `populate` until it succeeds, at most `max_attempts` times.
pub fn populate_with_retries<R: Rng + ?Sized>(
    rng: &mut R,
    max_attempts: usize,
) -> Result<Layout, PlacementError> {
    for attempt in 1..=max_attempts {
        match populate(rng) {
            Ok(layout) => {
                if attempt > 1 {
                    debug!("fleet laid out after {} attempts", attempt);
                }
                return Ok(layout);
            }
            Err(e) => debug!("layout attempt {} failed: {}", attempt, e),
        }
    }
    Err(PlacementError::RetriesExhausted {
        attempts: max_attempts,
    })
}
