//! Strategy A - wraparound counter, no division inside the loop
//!
//! A rolling index tracks `n % 15` incrementally. When it would hit 15 it is
//! bumped to 16 and masked with `0xF`, which folds it back to 0 without a
//! compare-and-reset on the hot path.
//!
//! ```text
//! n      : 1  2 .. 14 15 16 ..
//! mod15  : 1  2 .. 14  0  1 ..
//! ```

use crate::line::{FIRST, LAST, Line, Step};

/// Table keyed by residue mod 15 (entry 0 = residue 0)
const MOD15: [Line; 15] = [
    Line::FizzBuzz, //  0  %3 %5
    Line::Number,   //  1
    Line::Number,   //  2
    Line::Fizz,     //  3  %3
    Line::Number,   //  4
    Line::Buzz,     //  5     %5
    Line::Fizz,     //  6  %3
    Line::Number,   //  7
    Line::Number,   //  8
    Line::Fizz,     //  9  %3
    Line::Buzz,     // 10     %5
    Line::Number,   // 11
    Line::Fizz,     // 12  %3
    Line::Number,   // 13
    Line::Number,   // 14
];

/// Advance the rolling residue: 14 → 0, otherwise +1.
///
/// Valid only for `mod15 < 15`.
#[inline(always)]
pub const fn advance(mod15: usize) -> usize {
    let mut next = mod15 + 1;
    if next == 0xF {
        next += 1; // 15 -> 16
    }
    next & 0xF
}

/// Iterator over `FIRST..=LAST` driven by the wraparound counter
#[derive(Debug, Clone)]
pub struct Wraparound {
    n: u32,
    mod15: usize,
}

impl Wraparound {
    pub const fn new() -> Self {
        Self {
            n: FIRST,
            mod15: (FIRST % 15) as usize,
        }
    }

    /// Current rolling residue (the index the next step will use)
    #[inline]
    pub const fn residue(&self) -> usize {
        self.mod15
    }
}

impl Default for Wraparound {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Wraparound {
    type Item = Step;

    #[inline]
    fn next(&mut self) -> Option<Step> {
        if self.n > LAST {
            return None;
        }
        debug_assert_eq!(self.mod15, (self.n % 15) as usize);

        let step = Step::new(self.n, MOD15[self.mod15]);
        self.n += 1;
        self.mod15 = advance(self.mod15);
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (LAST + 1).saturating_sub(self.n) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Wraparound {}
