//! Batch driver
//!
//! [`BatchRunner`] runs an environment over a fixed table of input rows and
//! exposes the outputs lazily, one sampled row per [`Iterator::next`] call.
//! All inputs are fed up front (the queues absorb them), so the iterator
//! only has to tick until the next output appears or the cycle budget runs
//! out. The budget is shared across the whole run, not per item.

use crate::env::Environment;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use tzio_spec::Value;

pub struct BatchRunner {
    env: Environment,
    latest: Rc<RefCell<Option<Vec<Option<Value>>>>>,
    remaining_cycles: u64,
}

impl BatchRunner {
    pub(crate) fn new(
        mut env: Environment,
        inputs: Vec<Vec<Option<Value>>>,
        max_cycles: u64,
    ) -> Self {
        let latest = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&latest);
        env = env.on_output(move |row| {
            *sink.borrow_mut() = Some(row.to_vec());
        });
        for row in &inputs {
            env.consume(row);
        }
        debug!(rows = inputs.len(), max_cycles, "batch run started");
        Self {
            env,
            latest,
            remaining_cycles: max_cycles,
        }
    }

    pub fn remaining_cycles(&self) -> u64 {
        self.remaining_cycles
    }
}

impl Iterator for BatchRunner {
    type Item = Vec<Option<Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining_cycles > 0 {
            self.remaining_cycles -= 1;
            self.env.tick();
            if let Some(row) = self.latest.borrow_mut().take() {
                return Some(row);
            }
        }
        debug!(ticks = self.env.ticks(), "cycle budget exhausted");
        None
    }
}
