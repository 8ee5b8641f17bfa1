//! Program-counter shifts
//!
//! Every executed instruction produces a [`Shift`] describing how the node's
//! program counter moves. `Stay` is the blocked-operand case and is expected
//! behaviour, not an error. Jump targets borrow the label name from the
//! instruction that produced them and are resolved against the program's
//! label table; relative shifts are normalized into `[0, len)` with exact
//! modular arithmetic so they can wrap in both directions.

use crate::program::LabelTable;
use crate::Value;

/// Result of executing one instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift<'a> {
    /// Advance to the next instruction, wrapping at the end of the program
    Next,
    /// Retry the same instruction next tick (blocked operand)
    Stay,
    /// Jump to a named label
    Jump(&'a str),
    /// Move by a signed offset, wrapping in both directions
    Relative(Value),
}

impl Shift<'_> {
    /// Resolve this shift to the next program counter.
    ///
    /// `current` must be in `[0, len)` and `len` must be > 0; both are
    /// guaranteed by program compilation. Jump labels are guaranteed present
    /// in the table for the same reason.
    pub fn resolve(&self, labels: &LabelTable, current: usize, len: usize) -> usize {
        match self {
            Shift::Next => (current + 1) % len,
            Shift::Stay => current,
            Shift::Jump(label) => labels.index_of(label),
            Shift::Relative(delta) => {
                let target = current as i64 + *delta as i64;
                target.rem_euclid(len as i64) as usize
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_labels() -> LabelTable {
        LabelTable::default()
    }

    #[test]
    fn test_next_wraps() {
        let labels = no_labels();
        assert_eq!(Shift::Next.resolve(&labels, 3, 10), 4);
        assert_eq!(Shift::Next.resolve(&labels, 9, 10), 0);
    }

    #[test]
    fn test_stay() {
        let labels = no_labels();
        assert_eq!(Shift::Stay.resolve(&labels, 7, 10), 7);
    }

    #[test]
    fn test_relative_zero_and_one() {
        let labels = no_labels();
        // Relative(0) is equivalent to Stay, Relative(1) to Next
        assert_eq!(Shift::Relative(0).resolve(&labels, 4, 10), 4);
        assert_eq!(
            Shift::Relative(1).resolve(&labels, 4, 10),
            Shift::Next.resolve(&labels, 4, 10)
        );
    }

    #[test]
    fn test_relative_negative() {
        let labels = no_labels();
        assert_eq!(Shift::Relative(-2).resolve(&labels, 8, 10), 6);
        assert_eq!(Shift::Relative(-5).resolve(&labels, 4, 10), 9);
        // Several wraps back
        assert_eq!(Shift::Relative(-25).resolve(&labels, 4, 10), 9);
    }

    #[test]
    fn test_relative_positive() {
        let labels = no_labels();
        assert_eq!(Shift::Relative(3).resolve(&labels, 4, 10), 7);
        assert_eq!(Shift::Relative(5).resolve(&labels, 5, 10), 0);
        assert_eq!(Shift::Relative(23).resolve(&labels, 5, 10), 8);
    }

    #[test]
    fn test_relative_extremes() {
        let labels = no_labels();
        // i32 extremes must not overflow the arithmetic
        let pc = Shift::Relative(Value::MIN).resolve(&labels, 0, 7);
        assert!(pc < 7);
        let pc = Shift::Relative(Value::MAX).resolve(&labels, 6, 7);
        assert!(pc < 7);
    }
}
