//! Node stepper: program counter plus register state
//!
//! A stepper owns a node and its compiled program and advances exactly one
//! instruction per tick (a blocked instruction counts as its tick).

use crate::execute::execute;
use crate::node::Node;
use crate::slot::Slot;
use tzio_spec::CompiledProgram;

#[derive(Debug)]
pub struct Stepper {
    node: Node,
    program: CompiledProgram,
    pc: usize,
}

impl Stepper {
    pub fn new(node: Node, program: CompiledProgram) -> Self {
        Self {
            node,
            program,
            pc: 0,
        }
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Execute the current instruction and move the program counter.
    pub fn step(&mut self, slots: &mut [Slot]) {
        let inst = self.program.op(self.pc);
        let shift = execute(inst, &mut self.node, slots);
        self.pc = shift.resolve(self.program.labels(), self.pc, self.program.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tzio_spec::{InputRef, Instruction, OutputRef, Program};

    fn compiled(ops: Vec<Instruction>) -> CompiledProgram {
        Program::new(ops).compile().unwrap()
    }

    #[test]
    fn test_pc_wraps_past_last_instruction() {
        let program = compiled(vec![
            Instruction::Add {
                from: InputRef::Value(1),
            },
            Instruction::Add {
                from: InputRef::Value(10),
            },
        ]);
        let mut stepper = Stepper::new(Node::new(0, vec![], vec![]), program);
        let mut slots: Vec<Slot> = vec![];

        stepper.step(&mut slots);
        assert_eq!(stepper.pc(), 1);
        stepper.step(&mut slots);
        assert_eq!(stepper.pc(), 0);
        stepper.step(&mut slots);
        assert_eq!(stepper.node().acc(), 12);
    }

    #[test]
    fn test_blocked_instruction_keeps_pc() {
        let program = compiled(vec![Instruction::Mov {
            from: InputRef::Slot(1),
            to: OutputRef::Acc,
        }]);
        let mut stepper = Stepper::new(Node::new(0, vec![0], vec![]), program);
        let mut slots = vec![Slot::data()];

        stepper.step(&mut slots);
        assert_eq!(stepper.pc(), 0);

        slots[0].write(7);
        slots[0].step_end();
        stepper.step(&mut slots);
        assert_eq!(stepper.node().acc(), 7);
    }

    #[test]
    fn test_jump_moves_to_label_target() {
        let program = compiled(vec![
            Instruction::Label {
                name: "top".to_string(),
            },
            Instruction::Add {
                from: InputRef::Value(1),
            },
            Instruction::Jmp {
                label: "top".to_string(),
            },
        ]);
        let mut stepper = Stepper::new(Node::new(0, vec![], vec![]), program);
        let mut slots: Vec<Slot> = vec![];

        stepper.step(&mut slots); // ADD
        stepper.step(&mut slots); // JMP top
        assert_eq!(stepper.pc(), 0);
        stepper.step(&mut slots); // ADD again
        assert_eq!(stepper.node().acc(), 2);
    }
}
