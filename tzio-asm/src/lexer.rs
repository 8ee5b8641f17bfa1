//! # Lexer for TZ-IO assembly
//!
//! One line holds one statement; the assembler lexes line by line, so there
//! is no newline token. `#` starts a comment running to the end of the line.

use logos::Logos;
use tzio_spec::Value;

/// Tokens for TZ-IO assembly
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")] // Skip whitespace
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Identifier (instruction mnemonics, labels, ACC, NIL)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Signed decimal number
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse().ok())]
    Number(Value),

    /// Input slot reference (`<1`)
    #[regex(r"<[0-9]+", |lex| lex.slice()[1..].parse().ok())]
    InPort(usize),

    /// Output slot reference (`>1`)
    #[regex(r">[0-9]+", |lex| lex.slice()[1..].parse().ok())]
    OutPort(usize),

    /// Comma
    #[token(",")]
    Comma,

    /// Colon (for labels)
    #[token(":")]
    Colon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_ports() {
        let mut lex = Token::lexer("<1 >12");
        assert_eq!(lex.next(), Some(Ok(Token::InPort(1))));
        assert_eq!(lex.next(), Some(Ok(Token::OutPort(12))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_numbers() {
        let mut lex = Token::lexer("42 -10 0");
        assert_eq!(lex.next(), Some(Ok(Token::Number(42))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(-10))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(0))));
    }

    #[test]
    fn test_lexer_instruction() {
        let mut lex = Token::lexer("MOV <1, ACC");
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("MOV".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::InPort(1))));
        assert_eq!(lex.next(), Some(Ok(Token::Comma)));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("ACC".to_string()))));
    }

    #[test]
    fn test_lexer_label() {
        let mut lex = Token::lexer("loop:");
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("loop".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Colon)));
    }

    #[test]
    fn test_lexer_comment() {
        let mut lex = Token::lexer("NEG # flip the sign");
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("NEG".to_string()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_rejects_garbage() {
        let mut lex = Token::lexer("MOV @");
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("MOV".to_string()))));
        assert!(matches!(lex.next(), Some(Err(_))));
    }
}
