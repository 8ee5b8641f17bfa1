//! Error types for TZ-IO program compilation and validation

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    // Label table construction
    #[error("Duplicate label: '{label}'")]
    DuplicateLabel { label: String },

    #[error("Undefined label: '{label}'")]
    UndefinedLabel { label: String },

    #[error("Program has no executable instruction")]
    EmptyProgram,

    // Binding validation
    #[error("Memory slot {slot} out of range (memory size: {size})")]
    MemorySlotOutOfRange { slot: usize, size: usize },

    #[error("Input reference <{slot} out of range (node has {count} inputs)")]
    InputOutOfRange { slot: usize, count: usize },

    #[error("Output reference >{slot} out of range (node has {count} outputs)")]
    OutputOutOfRange { slot: usize, count: usize },
}
