//! # AttackSet - Square Sets Backed by a Bitboard
//!
//! ## Overview
//!
//! An [`AttackSet`] is a set of board squares. It answers the questions the attack
//! oracle and the feature bank ask (is this square in the set, how many squares,
//! what is the union) and nothing else. The backing store is a single `u64` with
//! bit `n` standing for square `n` (bit 0 = a1, bit 63 = h8), but that layout is
//! private: nothing outside this module depends on it.
//!
//! Common operations are single instructions on the backing word:
//! - **Insert**: `bits |= 1 << square`
//! - **Contains**: `bits & (1 << square) != 0`
//! - **Count**: `bits.count_ones()` (hardware POPCNT)
//! - **Union**: `a | b`
//!
//! ## Further Reading
//!
//! - **Chess Programming Wiki - Bitboards**: https://www.chessprogramming.org/Bitboards

use std::ops::{BitOr, BitOrAssign};

use crate::types::Square;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttackSet(u64);

impl AttackSet {
    pub const EMPTY: AttackSet = AttackSet(0);

    pub fn new() -> Self {
        AttackSet(0)
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1 << square;
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !(1 << square);
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        (self.0 & (1 << square)) != 0
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn union(self, other: AttackSet) -> AttackSet {
        AttackSet(self.0 | other.0)
    }

    #[inline]
    pub fn intersection(self, other: AttackSet) -> AttackSet {
        AttackSet(self.0 & other.0)
    }

    /// Squares in ascending index order
    pub fn iter(&self) -> AttackSetIter {
        AttackSetIter(self.0)
    }
}

impl BitOr for AttackSet {
    type Output = AttackSet;

    fn bitor(self, rhs: AttackSet) -> AttackSet {
        self.union(rhs)
    }
}

impl BitOrAssign for AttackSet {
    fn bitor_assign(&mut self, rhs: AttackSet) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Square> for AttackSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = AttackSet::new();
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl IntoIterator for AttackSet {
    type Item = Square;
    type IntoIter = AttackSetIter;

    fn into_iter(self) -> AttackSetIter {
        AttackSetIter(self.0)
    }
}

pub struct AttackSetIter(u64);

impl Iterator for AttackSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for AttackSetIter {}
