//! Bitboard implementation for fast cell sets

use super::MAX_CELLS;

const WORDS: usize = 6;

/// Set of cell indices on a board of up to 19x19.
/// Uses 6 x u64 to represent 361 cells (6 * 64 = 384 >= 361).
/// Indices are row-major for the owning board's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < MAX_CELLS);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < MAX_CELLS);
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        idx < MAX_CELLS && (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Cells set in either bitboard
    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut bits = self.bits;
        for (word, o) in bits.iter_mut().zip(other.bits) {
            *word |= o;
        }
        Bitboard { bits }
    }

    /// Cells set here but not in `other`
    #[inline]
    pub fn difference(&self, other: &Bitboard) -> Bitboard {
        let mut bits = self.bits;
        for (word, o) in bits.iter_mut().zip(other.bits) {
            *word &= !o;
        }
        Bitboard { bits }
    }

    /// Iterate over set indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
            current_word: self.bits[0],
        }
    }
}

/// Iterator over set bits in a Bitboard
#[derive(Debug, Clone)]
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;

        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        if idx < MAX_CELLS {
            Some(idx)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        bb.set(0);
        bb.set(63);
        bb.set(64);
        bb.set(360);
        assert!(bb.get(0) && bb.get(63) && bb.get(64) && bb.get(360));
        assert!(!bb.get(1));
        assert_eq!(bb.count(), 4);

        bb.clear(63);
        assert!(!bb.get(63));
        assert_eq!(bb.count(), 3);
    }

    #[test]
    fn test_get_past_end_is_false() {
        let bb = Bitboard::new();
        assert!(!bb.get(MAX_CELLS));
        assert!(!bb.get(10_000));
    }

    #[test]
    fn test_iter_ones_ascending() {
        let mut bb = Bitboard::new();
        for idx in [200, 3, 129, 64, 17] {
            bb.set(idx);
        }
        let ones: Vec<usize> = bb.iter_ones().collect();
        assert_eq!(ones, vec![3, 17, 64, 129, 200]);
    }

    #[test]
    fn test_union_and_difference() {
        let mut a = Bitboard::new();
        let mut b = Bitboard::new();
        a.set(1);
        a.set(100);
        b.set(100);
        b.set(300);

        let u = a.union(&b);
        assert_eq!(u.iter_ones().collect::<Vec<_>>(), vec![1, 100, 300]);

        let d = u.difference(&b);
        assert_eq!(d.iter_ones().collect::<Vec<_>>(), vec![1]);
        assert!(Bitboard::new().is_empty());
        assert!(!d.is_empty());
    }
}
