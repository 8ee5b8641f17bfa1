//! TZ-IO Instruction Set
//!
//! A closed tagged set of operations on a node. Executing an instruction
//! yields a [`crate::Shift`] describing how the program counter moves;
//! instructions whose operands are not ready yield `Stay` rather than
//! failing, which is how inter-node backpressure is expressed.
//!
//! `Label` is a pseudo-instruction: it only marks a jump target and is
//! consumed when a program is compiled. It must never be executed.

use crate::reference::{InputRef, OutputRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// TZ-IO instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// MOV: copy a value from an input to an output
    Mov { from: InputRef, to: OutputRef },

    /// ADD: acc += input
    Add { from: InputRef },

    /// SUB: acc -= input
    Sub { from: InputRef },

    /// NEG: acc = -acc
    Neg,

    /// SAV: memory[slot] = acc
    Sav { slot: usize },

    /// SWP: swap(acc, memory[slot])
    Swp { slot: usize },

    /// Jump-target marker, stripped at compile time
    Label { name: String },

    /// JMP: unconditional jump to a label
    Jmp { label: String },

    /// JEZ: jump if acc == 0
    Jez { label: String },

    /// JNZ: jump if acc != 0
    Jnz { label: String },

    /// JGZ: jump if acc > 0
    Jgz { label: String },

    /// JLZ: jump if acc < 0
    Jlz { label: String },

    /// JRO: relative jump by the input value (0 stays, 1 advances)
    Jro { from: InputRef },
}

impl Instruction {
    /// Get instruction mnemonic
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Mov { .. } => "MOV",
            Instruction::Add { .. } => "ADD",
            Instruction::Sub { .. } => "SUB",
            Instruction::Neg => "NEG",
            Instruction::Sav { .. } => "SAV",
            Instruction::Swp { .. } => "SWP",
            Instruction::Label { .. } => "LABEL",
            Instruction::Jmp { .. } => "JMP",
            Instruction::Jez { .. } => "JEZ",
            Instruction::Jnz { .. } => "JNZ",
            Instruction::Jgz { .. } => "JGZ",
            Instruction::Jlz { .. } => "JLZ",
            Instruction::Jro { .. } => "JRO",
        }
    }

    /// Check if this is the label pseudo-instruction
    pub fn is_label(&self) -> bool {
        matches!(self, Instruction::Label { .. })
    }

    /// Get the label this instruction jumps to, if any
    pub fn jump_label(&self) -> Option<&str> {
        match self {
            Instruction::Jmp { label }
            | Instruction::Jez { label }
            | Instruction::Jnz { label }
            | Instruction::Jgz { label }
            | Instruction::Jlz { label } => Some(label),
            _ => None,
        }
    }

    /// Get the memory slot referenced by SAV/SWP, if any
    pub fn memory_slot(&self) -> Option<usize> {
        match self {
            Instruction::Sav { slot } | Instruction::Swp { slot } => Some(*slot),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Mov { from, to } => write!(f, "MOV {}, {}", from, to),
            Instruction::Add { from } => write!(f, "ADD {}", from),
            Instruction::Sub { from } => write!(f, "SUB {}", from),
            Instruction::Neg => write!(f, "NEG"),
            // Memory slots are written 1-based in assembly text
            Instruction::Sav { slot } => write!(f, "SAV {}", slot + 1),
            Instruction::Swp { slot } => write!(f, "SWP {}", slot + 1),
            Instruction::Label { name } => write!(f, "{}:", name),
            Instruction::Jmp { label } => write!(f, "JMP {}", label),
            Instruction::Jez { label } => write!(f, "JEZ {}", label),
            Instruction::Jnz { label } => write!(f, "JNZ {}", label),
            Instruction::Jgz { label } => write!(f, "JGZ {}", label),
            Instruction::Jlz { label } => write!(f, "JLZ {}", label),
            Instruction::Jro { from } => write!(f, "JRO {}", from),
        }
    }
}
