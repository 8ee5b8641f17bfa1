//! Runtime error types for TZ-IO
//!
//! Configuration errors are raised eagerly from `with_slots`/`add_node` and
//! never deferred to tick time. Blocked operands are not errors at all: they
//! surface as `Shift::Stay` and never reach this module.

use thiserror::Error;
use tzio_spec::SpecError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Program error: {0}")]
    Spec(#[from] SpecError),

    #[error("Existing node registered under '{name}'")]
    DuplicateNode { name: String },

    #[error("Slot index {index} out of range (slot count: {count})")]
    SlotOutOfRange { index: usize, count: usize },

    #[error("Slot {index} is an input queue and cannot be written")]
    QueueSlotNotWritable { index: usize },

    #[error("Malformed input line '{line}': invalid field '{field}'")]
    MalformedLine { line: String, field: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
