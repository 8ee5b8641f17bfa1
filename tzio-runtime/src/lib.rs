//! # TZ-IO runtime
//!
//! Execution engine for TZ-IO machines: transactional slots, per-node
//! steppers, the lock-step tick scheduler and the two drivers (batch over a
//! fixed input table, live over a line-based stream).
//!
//! ```
//! use tzio_runtime::Environment;
//! use tzio_spec::{InputRef, Instruction, OutputRef, Program};
//!
//! let program = Program::new(vec![Instruction::Mov {
//!     from: InputRef::Slot(1),
//!     to: OutputRef::Slot(1),
//! }]);
//! let env = Environment::with_slots(2, &[0], &[1])
//!     .unwrap()
//!     .add_node("fwd", 0, &[0], &[1], program)
//!     .unwrap();
//! let outputs: Vec<_> = env.run_on(vec![vec![Some(3)]], 10).collect();
//! assert_eq!(outputs, vec![vec![Some(3)]]);
//! ```

pub mod batch;
pub mod env;
pub mod error;
pub mod execute;
pub mod live;
pub mod node;
pub mod protocol;
pub mod slot;
pub mod stepper;

pub use batch::BatchRunner;
pub use env::Environment;
pub use error::{Result, RuntimeError};
pub use live::LiveRunner;
pub use node::Node;
pub use slot::Slot;
pub use stepper::Stepper;
