//! # TZ-IO assembler
//!
//! Textual front-end for TZ-IO node programs. One statement per line;
//! `<n`/`>n` reference the node's bound input/output slots (1-based), `ACC`
//! and `NIL` name the pseudo-registers, `label:` declares a jump target and
//! `#` starts a comment.
//!
//! ```
//! let program = tzio_asm::assemble(
//!     "loop: MOV <1, ACC\n\
//!      ADD 1\n\
//!      MOV ACC, >1\n\
//!      JMP loop\n",
//! )
//! .unwrap();
//! assert_eq!(program.ops.len(), 5);
//! ```

pub mod assembler;
pub mod error;
pub mod lexer;
pub mod parser;

pub use assembler::assemble;
pub use error::{AsmError, Result};
