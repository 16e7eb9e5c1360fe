//! Fixed-size bit masks over an `N×N` grid, packed into an unsigned integer.
//!
//! Used for the fired-shot set of each player and for ship occupancy during
//! placement, where the no-touch rule becomes a single `dilate` + `&`.

use core::fmt;
use core::ops::BitAnd;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;

/// Mask type used across the engine for the 10×10 board.
pub type CellMask = BitBoard<u128, BOARD_SIZE>;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is outside `[0..N)`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "index out of bounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An `N×N` grid of flags stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn full_mask() -> T {
        if Self::CELLS == T::zero().count_zeros() as usize {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> T {
        T::one() << (row * N + col)
    }

    #[inline]
    fn check_bounds(row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Empty mask.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Mask with every cell set.
    #[inline]
    pub fn full() -> Self {
        BitBoard {
            bits: Self::full_mask(),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Self::check_bounds(row, col)?;
        Ok(self.bits & Self::bit(row, col) != T::zero())
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(row, col)?;
        self.bits = self.bits | Self::bit(row, col);
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(row, col)?;
        self.bits = self.bits & !Self::bit(row, col);
        Ok(())
    }

    /// Number of set cells.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns `true` when every cell of the grid is set.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.bits == Self::full_mask()
    }

    /// Builds a mask from `(row, col)` pairs.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in cells {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Builds a mask by asking `f` about every cell.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut bits = T::zero();
        for r in 0..N {
            for c in 0..N {
                if f(r, c) {
                    bits = bits | Self::bit(r, c);
                }
            }
        }
        BitBoard { bits }
    }

    /// Grows every set cell into its 3×3 neighbourhood, clipped at the edges.
    pub fn dilate(&self) -> Self {
        let mut out = *self;
        for (r, c) in self.iter_set_bits() {
            let r_lo = r.saturating_sub(1);
            let c_lo = c.saturating_sub(1);
            let r_hi = (r + 1).min(N - 1);
            let c_hi = (c + 1).min(N - 1);
            for rr in r_lo..=r_hi {
                for cc in c_lo..=c_hi {
                    out.bits = out.bits | Self::bit(rr, cc);
                }
            }
        }
        out
    }

    /// Iterator over the set cells in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<T, N> {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let set = self.bits & Self::bit(r, c) != T::zero();
                write!(f, "{} ", if set { '■' } else { '□' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct SetBits<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & T::one() != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
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
