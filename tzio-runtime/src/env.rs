//! Execution environment: slot board, registered nodes and the tick loop
//!
//! The environment owns every slot and every node. Configuration is a
//! two-stage builder: [`Environment::with_slots`] fixes the slot board and
//! the external boundary, then [`Environment::add_node`] registers each node
//! with its program. All configuration errors are raised at registration
//! time so that a ticking environment can no longer fail.
//!
//! A tick runs four phases in a fixed order:
//! 1. every slot starts its transaction,
//! 2. every node executes one instruction, in registration order,
//! 3. every slot commits,
//! 4. the output slots are sampled and, if any held a value, the consumer
//!    callback receives the sampled row.
//!
//! Because all cross-node effects go through the transactional slots, the
//! sequential phase 2 is observationally simultaneous and the whole tick is
//! deterministic.

use crate::error::{Result, RuntimeError};
use crate::node::Node;
use crate::slot::Slot;
use crate::stepper::Stepper;
use crate::BatchRunner;
use tracing::{debug, trace};
use tzio_spec::{Program, Value};

pub struct Environment {
    slots: Vec<Slot>,
    input_slots: Vec<usize>,
    output_slots: Vec<usize>,
    /// Nodes in registration order, which is also their phase-2 order
    nodes: Vec<(String, Stepper)>,
    consumer: Box<dyn FnMut(&[Option<Value>])>,
    ticks: u64,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("slots", &self.slots)
            .field("input_slots", &self.input_slots)
            .field("output_slots", &self.output_slots)
            .field("nodes", &self.nodes)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

impl Environment {
    /// Create an environment with `count` slots. Slots listed in `inputs`
    /// become external input queues; slots listed in `outputs` are sampled
    /// after each tick. A slot cannot be both.
    pub fn with_slots(count: usize, inputs: &[usize], outputs: &[usize]) -> Result<Self> {
        let mut slots: Vec<Slot> = (0..count).map(|_| Slot::data()).collect();
        for &index in inputs {
            check_slot(index, count)?;
            slots[index] = Slot::queue();
        }
        for &index in outputs {
            check_slot(index, count)?;
            if slots[index].is_queue() {
                return Err(RuntimeError::QueueSlotNotWritable { index });
            }
        }

        debug!(
            slots = count,
            inputs = inputs.len(),
            outputs = outputs.len(),
            "environment configured"
        );
        Ok(Self {
            slots,
            input_slots: inputs.to_vec(),
            output_slots: outputs.to_vec(),
            nodes: Vec::new(),
            consumer: Box::new(|_| {}),
            ticks: 0,
        })
    }

    /// Register a node under a unique name. The program is compiled and
    /// checked against the node's memory size and slot bindings; the node's
    /// output bindings must not point at input queues.
    pub fn add_node(
        mut self,
        name: &str,
        memory_size: usize,
        inputs: &[usize],
        outputs: &[usize],
        program: Program,
    ) -> Result<Self> {
        if self.nodes.iter().any(|(existing, _)| existing == name) {
            return Err(RuntimeError::DuplicateNode {
                name: name.to_string(),
            });
        }
        for &index in inputs {
            check_slot(index, self.slots.len())?;
        }
        for &index in outputs {
            check_slot(index, self.slots.len())?;
            if self.slots[index].is_queue() {
                return Err(RuntimeError::QueueSlotNotWritable { index });
            }
        }

        let compiled = program.compile()?;
        compiled.validate_bindings(memory_size, inputs.len(), outputs.len())?;

        debug!(node = name, program_len = compiled.len(), "node registered");
        let node = Node::new(memory_size, inputs.to_vec(), outputs.to_vec());
        self.nodes.push((name.to_string(), Stepper::new(node, compiled)));
        Ok(self)
    }

    /// Replace the output consumer invoked whenever a tick produced output.
    pub fn on_output(mut self, consumer: impl FnMut(&[Option<Value>]) + 'static) -> Self {
        self.consumer = Box::new(consumer);
        self
    }

    pub fn input_count(&self) -> usize {
        self.input_slots.len()
    }

    pub fn output_count(&self) -> usize {
        self.output_slots.len()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Feed one row of external values, one per input queue in declaration
    /// order. `None` fields leave their queue untouched.
    pub fn consume(&mut self, values: &[Option<Value>]) {
        for (&slot, value) in self.input_slots.iter().zip(values) {
            if let Some(value) = value {
                self.slots[slot].enqueue(*value);
            }
        }
    }

    /// Advance the whole environment by one tick.
    pub fn tick(&mut self) {
        for slot in &mut self.slots {
            slot.step_start();
        }
        for (name, stepper) in &mut self.nodes {
            trace!(node = name.as_str(), pc = stepper.pc(), "step");
            stepper.step(&mut self.slots);
        }
        for slot in &mut self.slots {
            slot.step_end();
        }
        self.ticks += 1;

        let mut produced = false;
        let sample: Vec<Option<Value>> = self
            .output_slots
            .iter()
            .map(|&index| {
                let slot = &mut self.slots[index];
                if slot.can_read() {
                    produced = true;
                    Some(slot.read())
                } else {
                    None
                }
            })
            .collect();
        if produced {
            trace!(tick = self.ticks, ?sample, "output sampled");
            (self.consumer)(&sample);
        }
    }

    /// Run this environment over a fixed input table, producing one output
    /// row per iterator item. See [`BatchRunner`] for the budget semantics.
    pub fn run_on(self, inputs: Vec<Vec<Option<Value>>>, max_cycles: u64) -> BatchRunner {
        BatchRunner::new(self, inputs, max_cycles)
    }
}

fn check_slot(index: usize, count: usize) -> Result<()> {
    if index >= count {
        return Err(RuntimeError::SlotOutOfRange { index, count });
    }
    Ok(())
}
