//! Bitboard representation of square sets.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the board.
//! Bit 0 = row 0 / column 0 (top-left of the text grid), bit 63 = row 7 / column 7.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::types::Direction;

/// A bitboard representing a set of squares on the draughts board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    // Columns
    pub const COL_0: Bitboard = Bitboard(0x0101010101010101);
    pub const COL_7: Bitboard = Bitboard(0x8080808080808080);

    // Useful masks
    pub const NOT_COL_0: Bitboard = Bitboard(!0x0101010101010101);
    pub const NOT_COL_7: Bitboard = Bitboard(!0x8080808080808080);

    /// Left and right edge columns.
    pub const EDGES: Bitboard = Bitboard(Self::COL_0.0 | Self::COL_7.0);

    /// Rows 0..=3, the half Red advances into.
    pub const TOP_HALF: Bitboard = Bitboard(0x00000000FFFFFFFF);
    /// Rows 4..=7, the half Black advances into.
    pub const BOTTOM_HALF: Bitboard = Bitboard(0xFFFFFFFF00000000);

    /// Central cross: rows 2..=5 of columns 3..=4 plus columns 2..=5 of rows 3..=4.
    pub const CENTER: Bitboard = {
        let mut bits = 0u64;
        let mut sq = 0u8;
        while sq < 64 {
            let row = sq / 8;
            let col = sq % 8;
            if (row >= 2 && row <= 5 && col >= 3 && col <= 4)
                || (col >= 2 && col <= 5 && row >= 3 && row <= 4)
            {
                bits |= 1u64 << sq;
            }
            sq += 1;
        }
        Bitboard(bits)
    };

    /// Create a bitboard with a single square set.
    #[inline(always)]
    pub const fn from_square(sq: u8) -> Self {
        Bitboard(1u64 << sq)
    }

    /// Check if the bitboard is empty.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if a specific square is set.
    #[inline(always)]
    pub const fn contains(self, sq: u8) -> bool {
        (self.0 & (1u64 << sq)) != 0
    }

    /// Set a square in the bitboard.
    #[inline(always)]
    pub fn set(&mut self, sq: u8) {
        self.0 |= 1u64 << sq;
    }

    /// Clear a square in the bitboard.
    #[inline(always)]
    pub fn clear(&mut self, sq: u8) {
        self.0 &= !(1u64 << sq);
    }

    /// Count the number of set bits (population count).
    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Get and remove the least significant bit. Returns the square index.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            let sq = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1; // Clear the LSB
            Some(sq)
        }
    }

    /// Shift every square one step along a diagonal, dropping squares that
    /// would leave the board.
    #[inline(always)]
    pub const fn shift(self, dir: Direction) -> Bitboard {
        match dir {
            Direction::UpLeft => Bitboard((self.0 >> 9) & Self::NOT_COL_7.0),
            Direction::UpRight => Bitboard((self.0 >> 7) & Self::NOT_COL_0.0),
            Direction::DownLeft => Bitboard((self.0 << 7) & Self::NOT_COL_7.0),
            Direction::DownRight => Bitboard((self.0 << 9) & Self::NOT_COL_0.0),
        }
    }
}

// Operator implementations for convenient bitwise operations
impl BitAnd for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

/// Iterator over set bits in a bitboard.
impl Iterator for Bitboard {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lsb()
    }
}

#[cfg(test)]
#[path = "bitboard_tests.rs"]
mod bitboard_tests;
