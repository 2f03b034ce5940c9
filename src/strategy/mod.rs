//! Sequence strategies
//!
//! Three interchangeable ways to pick the table entry for n. Each module owns
//! its table and its iterator; they share only the [`Line`](crate::line::Line)
//! vocabulary.
//!
//! - [`wraparound`] - rolling residue, no division in the loop
//! - [`direct`] - `n % 15` into a 15-entry table
//! - [`offset`] - `n % 3` and `n % 5` into a 4-entry table

pub mod direct;
pub mod offset;
pub mod wraparound;

pub use direct::Direct;
pub use offset::Offset;
pub use wraparound::Wraparound;

use std::fmt;
use std::io::Write;

use crate::emit::emit_steps;
use crate::error::EmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Wraparound,
    Direct,
    Offset,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Wraparound, Strategy::Direct, Strategy::Offset];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Wraparound => "wraparound",
            Strategy::Direct => "direct",
            Strategy::Offset => "offset",
        }
    }

    /// Emit the full sequence with this strategy, returning the line count
    pub fn emit<W: Write + ?Sized>(self, out: &mut W) -> Result<usize, EmitError> {
        match self {
            Strategy::Wraparound => emit_steps(Wraparound::new(), out),
            Strategy::Direct => emit_steps(Direct::new(), out),
            Strategy::Offset => emit_steps(Offset::new(), out),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::{LAST, LINE_COUNT};

    #[test]
    fn test_all_strategies_emit_identical_bytes() {
        let outputs: Vec<Vec<u8>> = Strategy::ALL
            .iter()
            .map(|s| {
                let mut buf = Vec::new();
                assert_eq!(s.emit(&mut buf).unwrap(), LINE_COUNT);
                buf
            })
            .collect();

        assert_eq!(outputs[0], outputs[1], "wraparound vs direct");
        assert_eq!(outputs[1], outputs[2], "direct vs offset");
    }

    #[test]
    fn test_iterators_agree_stepwise() {
        let steps = Wraparound::new().zip(Direct::new()).zip(Offset::new());
        for ((a, b), c) in steps {
            assert_eq!(a, b);
            assert_eq!(b, c);
        }
    }

    #[test]
    fn test_last_line_is_buzz() {
        let mut buf = Vec::new();
        Strategy::Offset.emit(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("98\nFizz\nBuzz\n"));
        assert_eq!(text.lines().count(), LAST as usize);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Strategy::Wraparound.to_string(), "wraparound");
        assert_eq!(Strategy::Direct.to_string(), "direct");
        assert_eq!(Strategy::Offset.to_string(), "offset");
    }
}
