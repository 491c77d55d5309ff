//! Cell grid and the per-side board used during play.

use alloc::vec::Vec;
use core::fmt;

use super::common::{BoardError, ShotOutcome};
use super::config::{CellSet, BOARD_SIZE, BOARD_WIDTH};
use super::placement::Layout;
use super::ship::PlacedShip;

/// State of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// `true` once the cell has been fired upon.
    pub fn is_shot(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Raw `BOARD_WIDTH × BOARD_HEIGHT` cell storage.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; BOARD_SIZE],
}

impl Grid {
    /// A grid with every cell `Empty`.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Cells currently in state `Ship`.
    pub fn ship_cells(&self) -> CellSet {
        let ships = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Ship)
            .map(|(i, _)| i);
        CellSet::from_indices(ships).unwrap_or_default()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            let ch = match cell {
                Cell::Empty => '.',
                Cell::Ship => 'S',
                Cell::Hit => 'X',
                Cell::Miss => 'o',
            };
            write!(f, "{}", ch)?;
            if (i + 1) % BOARD_WIDTH == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// One side's board: cell states, the ships laid on it and the count of
/// ship cells not yet hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: Vec<PlacedShip>,
    remaining: usize,
}

impl Board {
    /// An empty board with no ships.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            ships: Vec::new(),
            remaining: 0,
        }
    }

    /// Wrap a populated layout for play.
    pub fn from_layout(layout: Layout) -> Self {
        let (grid, ships) = layout.into_parts();
        let remaining = grid.ship_cells().count_ones();
        Self {
            grid,
            ships,
            remaining,
        }
    }

    /// State of the cell at `index`.
    pub fn cell_state(&self, index: usize) -> Result<Cell, BoardError> {
        self.grid.get(index).ok_or(BoardError::InvalidIndex(index))
    }

    /// Fire at `index`. A cell may be shot only once; later shots at the
    /// same cell return `AlreadyShot` and change nothing.
    pub fn mark_shot(&mut self, index: usize) -> Result<ShotOutcome, BoardError> {
        match self.cell_state(index)? {
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyShot(index)),
            Cell::Empty => {
                self.grid.set(index, Cell::Miss);
                Ok(ShotOutcome::Miss)
            }
            Cell::Ship => {
                self.grid.set(index, Cell::Hit);
                self.remaining -= 1;
                Ok(self.hit_outcome(index))
            }
        }
    }

    fn hit_outcome(&self, index: usize) -> ShotOutcome {
        match self.ships.iter().find(|ship| ship.contains(index)) {
            Some(ship) if ship.cells().iter_ones().all(|i| self.grid.get(i) == Some(Cell::Hit)) => {
                ShotOutcome::Sunk(ship.kind)
            }
            _ => ShotOutcome::Hit,
        }
    }

    /// Ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.remaining
    }

    pub fn is_defeated(&self) -> bool {
        self.remaining == 0
    }

    pub fn placed_ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Ships with every cell hit.
    pub fn sunk_ships(&self) -> usize {
        self.ships
            .iter()
            .filter(|ship| ship.cells().iter_ones().all(|i| self.grid.get(i) == Some(Cell::Hit)))
            .count()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        self.grid.cells()
    }

    /// Cells holding an intact ship.
    pub fn ship_cells(&self) -> CellSet {
        self.grid.ship_cells()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
