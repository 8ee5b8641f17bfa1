//! Addressing modes for instruction operands
//!
//! A reference resolves an operand to one of the data sources or sinks a
//! node can reach: one of its bound slots (1-based, in the order the slots
//! were bound to the node), its accumulator, an immediate constant, or NIL.
//! NIL always reads 0 and swallows writes; both directions are always ready.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of a value for MOV, ADD, SUB and JRO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputRef {
    /// One of the node's bound input slots (1-based)
    Slot(usize),
    /// The node's accumulator
    Acc,
    /// An immediate constant (always readable)
    Value(Value),
    /// The null source: reads 0, always ready
    Nil,
}

/// Destination of a value for MOV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputRef {
    /// One of the node's bound output slots (1-based)
    Slot(usize),
    /// The node's accumulator
    Acc,
    /// The null sink: writes are dropped, always ready
    Nil,
}

impl fmt::Display for InputRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputRef::Slot(idx) => write!(f, "<{}", idx),
            InputRef::Acc => write!(f, "ACC"),
            InputRef::Value(value) => write!(f, "{}", value),
            InputRef::Nil => write!(f, "NIL"),
        }
    }
}

impl fmt::Display for OutputRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputRef::Slot(idx) => write!(f, ">{}", idx),
            OutputRef::Acc => write!(f, "ACC"),
            OutputRef::Nil => write!(f, "NIL"),
        }
    }
}
