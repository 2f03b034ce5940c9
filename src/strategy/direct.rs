//! Strategy B - one `% 15` per step into a 15-entry table

use crate::line::{FIRST, LAST, Line, Step};

const MOD15: [Line; 15] = [
    Line::FizzBuzz, //  0
    Line::Number,   //  1
    Line::Number,   //  2
    Line::Fizz,     //  3
    Line::Number,   //  4
    Line::Buzz,     //  5
    Line::Fizz,     //  6
    Line::Number,   //  7
    Line::Number,   //  8
    Line::Fizz,     //  9
    Line::Buzz,     // 10
    Line::Number,   // 11
    Line::Fizz,     // 12
    Line::Number,   // 13
    Line::Number,   // 14
];

/// Classify `n` by its residue mod 15
#[inline]
pub const fn classify(n: u32) -> Line {
    MOD15[(n % 15) as usize]
}

/// Iterator over `FIRST..=LAST`, one `% 15` per step
#[derive(Debug, Clone)]
pub struct Direct {
    n: u32,
}

impl Direct {
    pub const fn new() -> Self {
        Self { n: FIRST }
    }
}

impl Default for Direct {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Direct {
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

impl ExactSizeIterator for Direct {}
