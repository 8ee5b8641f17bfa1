//! Source-to-program assembly

use crate::error::{AsmError, Result};
use crate::lexer::Token;
use crate::parser::parse_line;
use logos::Logos;
use tzio_spec::{Instruction, Program};

/// Assemble a full source text into a [`Program`].
///
/// The result still contains label markers; compiling it (and checking
/// labels) is the runtime's job at node registration.
pub fn assemble(source: &str) -> Result<Program> {
    let mut ops: Vec<Instruction> = Vec::new();
    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let tokens: Vec<Token> = Token::lexer(text)
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| AsmError::InvalidToken { line })?;
        ops.extend(parse_line(line, &tokens)?);
    }
    Ok(Program::new(ops))
}
