//! # TZ-IO Specification
//!
//! Core data model for the TZ-IO multi-node virtual machine: a fixed set of
//! nodes, each running a tiny instruction program over a private accumulator
//! and memory bank, communicating through shared single-value slots and
//! advancing in lock-step ticks.
//!
//! ## Key concepts
//! - **References**: addressing modes resolving an operand to a slot, the
//!   accumulator, a constant, or the NIL sink.
//! - **Instructions**: a closed tagged set (MOV, ADD, SUB, NEG, SAV, SWP,
//!   jumps, JRO), each producing a [`Shift`] when executed.
//! - **Programs**: raw instruction lists compiled into a marker-free
//!   executable form with a label table, so no jump can ever land on an
//!   unexecutable label marker.
//!
//! The execution engine itself lives in `tzio-runtime`; this crate only
//! describes programs and how program counters move.

pub mod error;
pub mod instruction;
pub mod program;
pub mod reference;
pub mod shift;

pub use error::SpecError;
pub use instruction::Instruction;
pub use program::{CompiledProgram, LabelTable, Program};
pub use reference::{InputRef, OutputRef};
pub use shift::Shift;

/// Value carried by slots and registers (native signed integer; wraps).
pub type Value = i32;
