//! Program compilation
//!
//! A [`Program`] is the raw instruction list as authored, label markers
//! included. Compiling it builds a [`CompiledProgram`]: the executable list
//! with markers stripped, plus a [`LabelTable`] mapping each label to the
//! index of the next executable instruction after its marker (wrapping at
//! the end of the program). Stripping the markers is what guarantees that no
//! shift — jump, next or relative — can ever land on an unexecutable marker.
//!
//! All structural errors (duplicate labels, undefined jump targets, programs
//! with nothing to execute) are raised here, at compile time, never during a
//! tick.

use crate::error::SpecError;
use crate::instruction::Instruction;
use crate::reference::{InputRef, OutputRef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw program: the authored instruction list, label markers included
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub ops: Vec<Instruction>,
}

impl Program {
    pub fn new(ops: Vec<Instruction>) -> Self {
        Self { ops }
    }

    /// Compile this program into its executable form.
    pub fn compile(self) -> Result<CompiledProgram, SpecError> {
        let executable_len = self.ops.iter().filter(|op| !op.is_label()).count();
        if executable_len == 0 {
            return Err(SpecError::EmptyProgram);
        }

        // Map each label to the index, in the stripped list, of the first
        // executable instruction after its marker, wrapping at the end.
        let mut labels = HashMap::new();
        let mut executable_before = 0usize;
        for op in &self.ops {
            match op {
                Instruction::Label { name } => {
                    let target = executable_before % executable_len;
                    if labels.insert(name.clone(), target).is_some() {
                        return Err(SpecError::DuplicateLabel {
                            label: name.clone(),
                        });
                    }
                }
                _ => executable_before += 1,
            }
        }

        for op in &self.ops {
            if let Some(label) = op.jump_label() {
                if !labels.contains_key(label) {
                    return Err(SpecError::UndefinedLabel {
                        label: label.to_string(),
                    });
                }
            }
        }

        let ops = self
            .ops
            .into_iter()
            .filter(|op| !op.is_label())
            .collect();

        Ok(CompiledProgram {
            ops,
            labels: LabelTable { indexes: labels },
        })
    }
}

/// Label name → executable instruction index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    indexes: HashMap<String, usize>,
}

impl LabelTable {
    /// Look up a label known to exist (guaranteed by compilation).
    pub fn index_of(&self, label: &str) -> usize {
        self.indexes[label]
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.indexes.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

/// Executable program: marker-free instruction list plus label table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledProgram {
    ops: Vec<Instruction>,
    labels: LabelTable,
}

impl CompiledProgram {
    pub fn op(&self, index: usize) -> &Instruction {
        &self.ops[index]
    }

    pub fn ops(&self) -> &[Instruction] {
        &self.ops
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Number of executable instructions (always > 0)
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Check every operand against the node it will run on: SAV/SWP memory
    /// indices must be below the memory size, slot references must point at
    /// one of the node's bound inputs/outputs (1-based).
    pub fn validate_bindings(
        &self,
        memory_size: usize,
        input_count: usize,
        output_count: usize,
    ) -> Result<(), SpecError> {
        for op in &self.ops {
            if let Some(slot) = op.memory_slot() {
                if slot >= memory_size {
                    return Err(SpecError::MemorySlotOutOfRange {
                        slot,
                        size: memory_size,
                    });
                }
            }
            match op {
                Instruction::Mov { from, to } => {
                    check_input(from, input_count)?;
                    check_output(to, output_count)?;
                }
                Instruction::Add { from }
                | Instruction::Sub { from }
                | Instruction::Jro { from } => check_input(from, input_count)?,
                _ => {}
            }
        }
        Ok(())
    }
}

fn check_input(reference: &InputRef, count: usize) -> Result<(), SpecError> {
    if let InputRef::Slot(slot) = *reference {
        if slot < 1 || slot > count {
            return Err(SpecError::InputOutOfRange { slot, count });
        }
    }
    Ok(())
}

fn check_output(reference: &OutputRef, count: usize) -> Result<(), SpecError> {
    if let OutputRef::Slot(slot) = *reference {
        if slot < 1 || slot > count {
            return Err(SpecError::OutputOutOfRange { slot, count });
        }
    }
    Ok(())
}
