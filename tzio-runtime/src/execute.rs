//! Instruction execution
//!
//! [`execute`] runs a single instruction against a node and the slot board,
//! returning the [`Shift`] to apply to the program counter. Blocking is
//! expressed through `Shift::Stay`: when an operand slot is not ready the
//! instruction has no effect and will be retried on the next tick.

use crate::node::Node;
use crate::slot::Slot;
use tzio_spec::{Instruction, Shift};

pub fn execute<'a>(inst: &'a Instruction, node: &mut Node, slots: &mut [Slot]) -> Shift<'a> {
    match inst {
        Instruction::Mov { from, to } => {
            if node.can_read(*from, slots) && node.can_write(*to, slots) {
                let value = node.read(*from, slots);
                node.write(*to, slots, value);
                Shift::Next
            } else {
                Shift::Stay
            }
        }
        Instruction::Add { from } => {
            if node.can_read(*from, slots) {
                let value = node.read(*from, slots);
                node.set_acc(node.acc().wrapping_add(value));
                Shift::Next
            } else {
                Shift::Stay
            }
        }
        Instruction::Sub { from } => {
            if node.can_read(*from, slots) {
                let value = node.read(*from, slots);
                node.set_acc(node.acc().wrapping_sub(value));
                Shift::Next
            } else {
                Shift::Stay
            }
        }
        Instruction::Neg => {
            node.set_acc(node.acc().wrapping_neg());
            Shift::Next
        }
        Instruction::Sav { slot } => {
            node.save(*slot);
            Shift::Next
        }
        Instruction::Swp { slot } => {
            node.swap(*slot);
            Shift::Next
        }
        Instruction::Label { name } => {
            panic!("Label marker '{}' reached the execution engine", name)
        }
        Instruction::Jmp { label } => Shift::Jump(label),
        Instruction::Jez { label } => {
            if node.acc() == 0 {
                Shift::Jump(label)
            } else {
                Shift::Next
            }
        }
        Instruction::Jnz { label } => {
            if node.acc() != 0 {
                Shift::Jump(label)
            } else {
                Shift::Next
            }
        }
        Instruction::Jgz { label } => {
            if node.acc() > 0 {
                Shift::Jump(label)
            } else {
                Shift::Next
            }
        }
        Instruction::Jlz { label } => {
            if node.acc() < 0 {
                Shift::Jump(label)
            } else {
                Shift::Next
            }
        }
        Instruction::Jro { from } => {
            if node.can_read(*from, slots) {
                // The offset operand is consumed even when it comes from a slot
                match node.read(*from, slots) {
                    0 => Shift::Stay,
                    1 => Shift::Next,
                    offset => Shift::Relative(offset),
                }
            } else {
                Shift::Stay
            }
        }
    }
}
