//! Live driver
//!
//! [`LiveRunner`] wires an environment to a line-based input stream and an
//! output writer. A background thread reads and parses input lines while the
//! main thread keeps the environment ticking, so a quiet stdin never stalls
//! the machine. When the input stream ends the runner keeps ticking for a
//! bounded number of drain cycles to flush in-flight values, then returns.

use crate::env::Environment;
use crate::error::{Result, RuntimeError};
use crate::protocol::{format_outputs, parse_line};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};
use tzio_spec::Value;

pub struct LiveRunner {
    poll_interval: Duration,
    drain_cycles: u64,
}

impl Default for LiveRunner {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(10),
            drain_cycles: 64,
        }
    }
}

impl LiveRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// How long a tick waits for a new input row before proceeding anyway.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Ticks to run after the input stream closes, to flush in-flight
    /// values. Cyclic machines may still hold values beyond this bound.
    pub fn drain_cycles(mut self, cycles: u64) -> Self {
        self.drain_cycles = cycles;
        self
    }

    /// Drive `env` until `input` is exhausted, writing each sampled output
    /// row to `output`. Returns the first input error encountered, if any.
    pub fn run(
        self,
        env: Environment,
        input: impl BufRead + Send + 'static,
        mut output: impl Write,
    ) -> Result<()> {
        let produced: Rc<RefCell<Vec<Vec<Option<Value>>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&produced);
        let mut env = env.on_output(move |row| sink.borrow_mut().push(row.to_vec()));

        let (in_tx, in_rx) = mpsc::channel::<Vec<Option<Value>>>();
        let (err_tx, err_rx) = mpsc::channel::<RuntimeError>();
        let reader = thread::spawn(move || {
            for line in input.lines() {
                let row = match line {
                    Ok(line) => parse_line(&line),
                    Err(err) => Err(err.into()),
                };
                let stop = match row {
                    Ok(row) => in_tx.send(row).is_err(),
                    Err(err) => {
                        let _ = err_tx.send(err);
                        true
                    }
                };
                if stop {
                    break;
                }
            }
        });

        let mut outcome = Ok(());
        loop {
            if let Ok(err) = err_rx.try_recv() {
                warn!(error = %err, "input stream failed");
                outcome = Err(err);
                break;
            }
            match in_rx.recv_timeout(self.poll_interval) {
                Ok(row) => env.consume(&row),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            env.tick();
            flush_rows(&produced, &mut output)?;
        }

        if outcome.is_ok() {
            debug!(cycles = self.drain_cycles, "input closed, draining");
            for _ in 0..self.drain_cycles {
                env.tick();
            }
            flush_rows(&produced, &mut output)?;
            if let Ok(err) = err_rx.try_recv() {
                outcome = Err(err);
            }
        }
        output.flush()?;

        let _ = reader.join();
        outcome
    }
}

fn flush_rows(
    produced: &Rc<RefCell<Vec<Vec<Option<Value>>>>>,
    output: &mut impl Write,
) -> Result<()> {
    for row in produced.borrow_mut().drain(..) {
        writeln!(output, "{}", format_outputs(&row))?;
    }
    Ok(())
}
