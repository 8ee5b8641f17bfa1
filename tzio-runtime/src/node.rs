//! Per-node register state
//!
//! A node owns an accumulator, an indexed memory bank (the BAK registers)
//! and ordered lists of bound slot ids. Slot references in instructions are
//! 1-based indexes into those lists; the node translates them to the
//! environment's slot ids. All slot access goes through the guarded slot
//! protocol, so callers must check `can_read`/`can_write` first.

use crate::slot::Slot;
use tzio_spec::{InputRef, OutputRef, Value};

#[derive(Debug)]
pub struct Node {
    acc: Value,
    memory: Vec<Value>,
    /// Environment slot ids bound as inputs, in binding order
    inputs: Vec<usize>,
    /// Environment slot ids bound as outputs, in binding order
    outputs: Vec<usize>,
}

impl Node {
    pub fn new(memory_size: usize, inputs: Vec<usize>, outputs: Vec<usize>) -> Self {
        Self {
            acc: 0,
            memory: vec![0; memory_size],
            inputs,
            outputs,
        }
    }

    pub fn acc(&self) -> Value {
        self.acc
    }

    pub fn set_acc(&mut self, value: Value) {
        self.acc = value;
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    pub fn memory_size(&self) -> usize {
        self.memory.len()
    }

    /// SAV: one-way copy of the accumulator into memory
    pub fn save(&mut self, slot: usize) {
        self.memory[slot] = self.acc;
    }

    /// SWP: exchange the accumulator with a memory slot
    pub fn swap(&mut self, slot: usize) {
        std::mem::swap(&mut self.acc, &mut self.memory[slot]);
    }

    pub fn can_read(&self, reference: InputRef, slots: &[Slot]) -> bool {
        match reference {
            InputRef::Slot(idx) => slots[self.inputs[idx - 1]].can_read(),
            InputRef::Acc | InputRef::Value(_) | InputRef::Nil => true,
        }
    }

    /// Read a value through a reference; reading a slot consumes its value.
    pub fn read(&mut self, reference: InputRef, slots: &mut [Slot]) -> Value {
        match reference {
            InputRef::Slot(idx) => slots[self.inputs[idx - 1]].read(),
            InputRef::Acc => self.acc,
            InputRef::Value(value) => value,
            InputRef::Nil => 0,
        }
    }

    pub fn can_write(&self, reference: OutputRef, slots: &[Slot]) -> bool {
        match reference {
            OutputRef::Slot(idx) => slots[self.outputs[idx - 1]].can_write(),
            OutputRef::Acc | OutputRef::Nil => true,
        }
    }

    pub fn write(&mut self, reference: OutputRef, slots: &mut [Slot], value: Value) {
        match reference {
            OutputRef::Slot(idx) => slots[self.outputs[idx - 1]].write(value),
            OutputRef::Acc => self.acc = value,
            OutputRef::Nil => {}
        }
    }
}
