//! Ship kinds and their authored rotations.
//!
//! Every orientation is written out by hand rather than derived by rotating
//! a matrix at runtime. Placement balance depends on these exact masks.

use core::fmt;

use super::config::{to_index, CellSet, BOARD_HEIGHT, BOARD_WIDTH, FLEET};

/// One of the four authored orientations of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Position in `ALL`.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Rotation for `ordinal % 4`.
    pub fn from_ordinal(ordinal: usize) -> Rotation {
        Self::ALL[ordinal % 4]
    }

    pub fn degrees(self) -> u16 {
        self.ordinal() as u16 * 90
    }
}

/// Immutable bounding box plus row-major occupancy mask.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ShipShape {
    width: usize,
    height: usize,
    mask: &'static [u8],
}

impl ShipShape {
    const fn new(width: usize, height: usize, mask: &'static [u8]) -> Self {
        Self {
            width,
            height,
            mask,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major mask of length `width * height`.
    pub fn mask(&self) -> &'static [u8] {
        self.mask
    }

    /// Occupied `(dx, dy)` offsets, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, bit)| **bit != 0)
            .map(move |(i, _)| (i % width, i / width))
    }

    pub fn cell_count(&self) -> usize {
        self.mask.iter().filter(|bit| **bit != 0).count()
    }

    /// Board cells covered with the top-left corner at `(left, top)`.
    ///
    /// Returns `None` when the bounding box leaves the board.
    pub fn project(&self, left: usize, top: usize) -> Option<CellSet> {
        if left >= BOARD_WIDTH
            || top >= BOARD_HEIGHT
            || self.width > BOARD_WIDTH - left
            || self.height > BOARD_HEIGHT - top
        {
            return None;
        }
        let mut set = CellSet::new();
        for (dx, dy) in self.cells() {
            set.set(to_index(left + dx, top + dy)).ok()?;
        }
        Some(set)
    }
}

impl fmt::Debug for ShipShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShipShape {{ {}x{}, mask: [", self.width, self.height)?;
        for (i, bit) in self.mask.iter().enumerate() {
            if i > 0 && i % self.width == 0 {
                write!(f, "|")?;
            }
            write!(f, "{}", bit)?;
        }
        write!(f, "] }}")
    }
}

const SCOUT: [ShipShape; 4] = [
    ShipShape::new(1, 1, &[1]),
    ShipShape::new(1, 1, &[1]),
    ShipShape::new(1, 1, &[1]),
    ShipShape::new(1, 1, &[1]),
];

const DESTROYER: [ShipShape; 4] = [
    ShipShape::new(2, 1, &[1, 1]),
    ShipShape::new(1, 2, &[1, 1]),
    ShipShape::new(2, 1, &[1, 1]),
    ShipShape::new(1, 2, &[1, 1]),
];

#[rustfmt::skip]
const CARRIER: [ShipShape; 4] = [
    ShipShape::new(4, 3, &[0, 1, 0, 1,
                           1, 1, 1, 1,
                           0, 1, 0, 0]),
    ShipShape::new(3, 4, &[0, 1, 0,
                           1, 1, 1,
                           0, 1, 0,
                           0, 1, 1]),
    ShipShape::new(4, 3, &[0, 0, 1, 0,
                           1, 1, 1, 1,
                           1, 0, 1, 0]),
    ShipShape::new(3, 4, &[1, 1, 0,
                           0, 1, 0,
                           1, 1, 1,
                           0, 1, 0]),
];

const BATTLESHIP: [ShipShape; 4] = [
    ShipShape::new(4, 1, &[1, 1, 1, 1]),
    ShipShape::new(1, 4, &[1, 1, 1, 1]),
    ShipShape::new(4, 1, &[1, 1, 1, 1]),
    ShipShape::new(1, 4, &[1, 1, 1, 1]),
];

/// The four kinds of ship in a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    /// Irregular 4×3 hull.
    Carrier,
    /// Straight four-cell hull.
    Battleship,
    /// Straight two-cell hull.
    Destroyer,
    /// Single cell.
    Scout,
}

impl ShipKind {
    pub const ALL: [ShipKind; 4] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Destroyer,
        ShipKind::Scout,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Scout => "Scout",
        }
    }

    /// Informational size annotation. For the carrier this is its 4×3
    /// bounding box, not the number of occupied cells.
    pub fn footprint(&self) -> usize {
        match self {
            ShipKind::Carrier => 12,
            ShipKind::Battleship => 4,
            ShipKind::Destroyer => 2,
            ShipKind::Scout => 1,
        }
    }

    /// Occupied cells, taken from the authored mask.
    pub fn cell_count(&self) -> usize {
        rotations(*self)[0].cell_count()
    }

    /// Instances of this kind in a full fleet.
    pub fn fleet_count(&self) -> usize {
        FLEET
            .iter()
            .find(|(kind, _)| kind == self)
            .map_or(0, |(_, count)| *count)
    }
}

/// All four authored orientations of `kind`, indexed by `Rotation::ordinal`.
pub fn rotations(kind: ShipKind) -> [ShipShape; 4] {
    match kind {
        ShipKind::Carrier => CARRIER,
        ShipKind::Battleship => BATTLESHIP,
        ShipKind::Destroyer => DESTROYER,
        ShipKind::Scout => SCOUT,
    }
}

/// Shape of `kind` at `rotation`.
pub fn shape(kind: ShipKind, rotation: Rotation) -> ShipShape {
    rotations(kind)[rotation.ordinal()]
}

/// A ship instance laid onto a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedShip {
    pub kind: ShipKind,
    pub rotation: Rotation,
    pub left: usize,
    pub top: usize,
    cells: CellSet,
}

impl PlacedShip {
    pub(crate) fn new(
        kind: ShipKind,
        rotation: Rotation,
        left: usize,
        top: usize,
        cells: CellSet,
    ) -> Self {
        Self {
            kind,
            rotation,
            left,
            top,
            cells,
        }
    }

    /// Board cells covered by this ship.
    pub fn cells(&self) -> CellSet {
        self.cells
    }

    pub fn shape(&self) -> ShipShape {
        shape(self.kind, self.rotation)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(index)
    }
}
