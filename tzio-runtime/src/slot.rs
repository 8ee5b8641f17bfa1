//! Transactional communication slots
//!
//! Slots are the only channel between nodes, and between nodes and the
//! outside world. A [`DataSlot`] holds at most one value and commits writes
//! at the end of the tick, which is what makes node execution look
//! simultaneous: a value written during tick T is invisible until T+1, and a
//! slot read during T cannot be refilled before T+1. A [`QueueSlot`] is the
//! external-input ingress: an unbounded FIFO with no commit phase.
//!
//! `read`/`write` must only be called behind their guards; calling them
//! unguarded is a programming error and panics.

use std::collections::VecDeque;
use tzio_spec::Value;

/// Single-value slot with end-of-tick commit
#[derive(Debug, Clone, Default)]
pub struct DataSlot {
    value: Value,
    /// Value was visible at the start of the tick
    committed: bool,
    /// Value will be visible after the next commit
    pending: bool,
}

impl DataSlot {
    pub fn can_read(&self) -> bool {
        self.committed && self.pending
    }

    pub fn read(&mut self) -> Value {
        assert!(self.can_read(), "Cannot read from this slot");
        self.pending = false;
        self.value
    }

    pub fn can_write(&self) -> bool {
        !self.committed && !self.pending
    }

    pub fn write(&mut self, value: Value) {
        assert!(self.can_write(), "Cannot write into this slot");
        self.value = value;
        self.pending = true;
    }

    fn step_end(&mut self) {
        self.committed = self.pending;
    }
}

/// Unbounded FIFO fed by the external boundary
#[derive(Debug, Clone, Default)]
pub struct QueueSlot {
    values: VecDeque<Value>,
}

impl QueueSlot {
    pub fn enqueue(&mut self, value: Value) {
        self.values.push_back(value);
    }

    pub fn can_read(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn read(&mut self) -> Value {
        match self.values.pop_front() {
            Some(value) => value,
            None => panic!("Cannot read without values"),
        }
    }
}

/// Any slot of the environment
#[derive(Debug, Clone)]
pub enum Slot {
    Data(DataSlot),
    Queue(QueueSlot),
}

impl Slot {
    pub fn data() -> Self {
        Slot::Data(DataSlot::default())
    }

    pub fn queue() -> Self {
        Slot::Queue(QueueSlot::default())
    }

    pub fn is_queue(&self) -> bool {
        matches!(self, Slot::Queue(_))
    }

    pub fn can_read(&self) -> bool {
        match self {
            Slot::Data(slot) => slot.can_read(),
            Slot::Queue(slot) => slot.can_read(),
        }
    }

    pub fn read(&mut self) -> Value {
        match self {
            Slot::Data(slot) => slot.read(),
            Slot::Queue(slot) => slot.read(),
        }
    }

    /// Queue slots are never writable by nodes; configuration rejects such
    /// bindings eagerly.
    pub fn can_write(&self) -> bool {
        match self {
            Slot::Data(slot) => slot.can_write(),
            Slot::Queue(_) => false,
        }
    }

    pub fn write(&mut self, value: Value) {
        match self {
            Slot::Data(slot) => slot.write(value),
            Slot::Queue(_) => panic!("Cannot write into an input queue"),
        }
    }

    /// Append an external value; only meaningful for queue slots.
    pub fn enqueue(&mut self, value: Value) {
        match self {
            Slot::Queue(slot) => slot.enqueue(value),
            Slot::Data(_) => panic!("Cannot enqueue into a data slot"),
        }
    }

    /// Transaction start (reserved extension point)
    pub fn step_start(&mut self) {}

    /// Transaction end: commit this tick's write or finalize a drain
    pub fn step_end(&mut self) {
        if let Slot::Data(slot) = self {
            slot.step_end();
        }
    }
}
