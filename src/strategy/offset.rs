//! Strategy C - two residue tests folded into a 2-bit offset
//!
//! ```text
//! offset = (n % 5 == 0) << 1 | (n % 3 == 0)
//!
//!  %5 %3  offset  entry
//!   0  0     0    number
//!   0  1     1    Fizz
//!   1  0     2    Buzz
//!   1  1     3    FizzBuzz
//! ```

use crate::line::{FIRST, LAST, Line, Step};

const MOD35: [Line; 4] = [Line::Number, Line::Fizz, Line::Buzz, Line::FizzBuzz];

/// Table offset for `n`, always in `0..4`
#[inline]
pub const fn offset(n: u32) -> usize {
    let is_mod3 = (n % 3 == 0) as usize;
    let is_mod5 = (n % 5 == 0) as usize;
    is_mod5 * 2 + is_mod3
}

#[inline]
pub const fn classify(n: u32) -> Line {
    MOD35[offset(n)]
}

/// Iterator over `FIRST..=LAST`, one offset computation per step
#[derive(Debug, Clone)]
pub struct Offset {
    n: u32,
}

impl Offset {
    pub const fn new() -> Self {
        Self { n: FIRST }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Offset {
    type Item = Step;

    #[inline]
    fn next(&mut self) -> Option<Step> {
        if self.n > LAST {
            return None;
        }
        let step = Step::new(self.n, classify(self.n));
        self.n += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (LAST + 1).saturating_sub(self.n) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Offset {}
