//! A fixed-size bit set over a `W×H` grid.
//!
//! Cells are addressed by linear index (`row * W + col`) and packed into the
//! unsigned integer `T`. The type is `no_std` friendly and never allocates.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Linear index is outside `[0, W*H)`.
    IndexOutOfBounds { index: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { index } => {
                write!(f, "IndexOutOfBounds: index={}", index)
            }
        }
    }
}

/// A `W×H` bitboard stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const W: usize, const H: usize> BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits (`W * H`).
    pub const CELLS: usize = W * H;

    const FITS: () = assert!(W * H <= mem::size_of::<T>() * 8, "board does not fit in T");

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Create an empty bitboard.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// `true` if every cell is set.
    pub fn is_full(&self) -> bool {
        self.bits == Self::mask()
    }

    /// Bit at `index`, bounds-checked.
    pub fn get(&self, index: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(index)?;
        Ok(self.contains(index))
    }

    /// Bit at `index`; out-of-range indices read as unset.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < Self::CELLS && ((self.bits >> index) & T::one()) != T::zero()
    }

    pub fn set(&mut self, index: usize) -> Result<(), BitBoardError> {
        self.check_bounds(index)?;
        self.bits = self.bits | (T::one() << index);
        Ok(())
    }

    pub fn clear(&mut self, index: usize) -> Result<(), BitBoardError> {
        self.check_bounds(index)?;
        self.bits = self.bits & !(T::one() << index);
        Ok(())
    }

    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn check_bounds(&self, index: usize) -> Result<(), BitBoardError> {
        if index >= Self::CELLS {
            Err(BitBoardError::IndexOutOfBounds { index })
        } else {
            Ok(())
        }
    }

    /// Build a board from linear indices.
    pub fn from_indices<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut board = Self::new();
        for i in iter {
            board.set(i)?;
        }
        Ok(board)
    }

    /// Iterator over set indices in ascending order.
    pub fn iter_ones(&self) -> Ones<T, W, H> {
        Ones {
            board: *self,
            idx: 0,
        }
    }

    /// Cells in the 8-neighbourhood of any set cell that are not set themselves.
    pub fn halo(&self) -> Self {
        let mut out = Self::new();
        for i in self.iter_ones() {
            for n in neighbours::<W, H>(i) {
                out.bits = out.bits | (T::one() << n);
            }
        }
        out & !*self
    }
}

/// In-bounds 8-neighbourhood of `index` on a `W×H` grid.
pub fn neighbours<const W: usize, const H: usize>(index: usize) -> impl Iterator<Item = usize> {
    let row = (index / W) as isize;
    let col = (index % W) as isize;
    (-1isize..=1)
        .flat_map(move |dr| (-1isize..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .filter_map(move |(dr, dc)| {
            let (r, c) = (row + dr, col + dc);
            if r < 0 || c < 0 || r >= H as isize || c >= W as isize {
                None
            } else {
                Some(r as usize * W + c as usize)
            }
        })
}

impl<T, const W: usize, const H: usize> Default for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const W: usize, const H: usize> fmt::Debug for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", W, H)?;
        for r in 0..H {
            for c in 0..W {
                let bit = if self.contains(r * W + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over set indices of a bitboard.
#[derive(Clone, Copy)]
pub struct Ones<T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: BitBoard<T, W, H>,
    idx: usize,
}

impl<T, const W: usize, const H: usize> Iterator for Ones<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.idx < W * H {
            let idx = self.idx;
            self.idx += 1;
            if self.board.contains(idx) {
                return Some(idx);
            }
        }
        None
    }
}

impl<T, const W: usize, const H: usize> BitAnd for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const W: usize, const H: usize> BitOr for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within board bounds.
impl<T, const W: usize, const H: usize> Not for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}
