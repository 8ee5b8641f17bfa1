//! Assembler errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AsmError {
    #[error("Syntax error at line {line}: {message}")]
    SyntaxError { line: usize, message: String },

    #[error("Unknown instruction '{mnemonic}' at line {line}")]
    UnknownInstruction { line: usize, mnemonic: String },

    #[error("Unrecognized token at line {line}")]
    InvalidToken { line: usize },
}

pub type Result<T> = std::result::Result<T, AsmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AsmError::SyntaxError {
            line: 3,
            message: "expected an operand".to_string(),
        };
        assert_eq!(err.to_string(), "Syntax error at line 3: expected an operand");

        let err = AsmError::UnknownInstruction {
            line: 1,
            mnemonic: "FOO".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown instruction 'FOO' at line 1");
    }
}
