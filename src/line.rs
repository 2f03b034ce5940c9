//! Line templates - the entries of every classification table
//!
//! A table entry is either a fixed word or a numeric template that embeds n.
//! Strategies only decide *which* entry applies; rendering lives here.

use std::borrow::Cow;
use std::io::{self, Write};

/// First sequence index (inclusive)
pub const FIRST: u32 = 1;

/// Last sequence index (inclusive)
pub const LAST: u32 = 100;

/// Number of lines every strategy emits
pub const LINE_COUNT: usize = (LAST - FIRST + 1) as usize;

/// One classification table entry.
///
/// # Rendering:
/// - `Number` → decimal n
/// - `Fizz` / `Buzz` / `FizzBuzz` → the literal word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Number,
    Fizz,
    Buzz,
    FizzBuzz,
}

impl Line {
    /// Literal text for word entries, `None` for the numeric template
    #[inline]
    pub const fn as_literal(self) -> Option<&'static str> {
        match self {
            Line::Number => None,
            Line::Fizz => Some("Fizz"),
            Line::Buzz => Some("Buzz"),
            Line::FizzBuzz => Some("FizzBuzz"),
        }
    }

    /// Render the line for `n` without the trailing newline
    pub fn render(self, n: u32) -> Cow<'static, str> {
        match self.as_literal() {
            Some(word) => Cow::Borrowed(word),
            None => Cow::Owned(n.to_string()),
        }
    }

    /// Write the line for `n`, newline included
    #[inline]
    pub fn write_to<W: Write + ?Sized>(self, n: u32, out: &mut W) -> io::Result<()> {
        match self.as_literal() {
            Some(word) => writeln!(out, "{}", word),
            None => writeln!(out, "{}", n),
        }
    }
}

/// One classified position in the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub n: u32,
    pub line: Line,
}

impl Step {
    #[inline]
    pub const fn new(n: u32, line: Line) -> Self {
        Self { n, line }
    }

    /// Rendered text without the trailing newline
    pub fn render(&self) -> Cow<'static, str> {
        self.line.render(self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_words_ignore_n() {
        assert_eq!(Line::Fizz.render(3), "Fizz");
        assert_eq!(Line::Buzz.render(77), "Buzz");
        assert_eq!(Line::FizzBuzz.render(15), "FizzBuzz");
    }

    #[test]
    fn test_render_number() {
        assert_eq!(Line::Number.render(1), "1");
        assert_eq!(Line::Number.render(98), "98");
        assert!(Line::Number.as_literal().is_none());
    }

    #[test]
    fn test_write_to_appends_newline() {
        let mut buf = Vec::new();
        Line::Number.write_to(7, &mut buf).unwrap();
        Line::FizzBuzz.write_to(30, &mut buf).unwrap();
        assert_eq!(buf, b"7\nFizzBuzz\n");
    }

    #[test]
    fn test_line_count() {
        assert_eq!(LINE_COUNT, 100);
    }
}
