//! Assembly parser
//!
//! Parses one lexed line into zero or more instructions. A line is either
//! blank, a label declaration (`loop:`), an instruction, or a label followed
//! by an instruction on the same line (`loop: NEG`).

use crate::error::{AsmError, Result};
use crate::lexer::Token;
use tzio_spec::{InputRef, Instruction, OutputRef};

/// Parse the tokens of one source line. `line` is the 1-based line number
/// used in error messages.
pub fn parse_line(line: usize, tokens: &[Token]) -> Result<Vec<Instruction>> {
    let mut out = Vec::new();
    let mut rest = tokens;

    // Leading label declaration
    if let [Token::Identifier(name), Token::Colon, tail @ ..] = rest {
        out.push(Instruction::Label { name: name.clone() });
        rest = tail;
    }

    if rest.is_empty() {
        return Ok(out);
    }

    let (mnemonic, operands) = match rest {
        [Token::Identifier(mnemonic), tail @ ..] => (mnemonic, tail),
        _ => {
            return Err(AsmError::SyntaxError {
                line,
                message: "expected an instruction mnemonic".to_string(),
            })
        }
    };

    let inst = match mnemonic.to_ascii_uppercase().as_str() {
        "MOV" => parse_mov(line, operands)?,
        "ADD" => Instruction::Add {
            from: parse_single_input(line, operands)?,
        },
        "SUB" => Instruction::Sub {
            from: parse_single_input(line, operands)?,
        },
        "NEG" => {
            expect_no_operands(line, "NEG", operands)?;
            Instruction::Neg
        }
        "SAV" => Instruction::Sav {
            slot: parse_memory_slot(line, operands)?,
        },
        "SWP" => Instruction::Swp {
            slot: parse_memory_slot(line, operands)?,
        },
        "JMP" => Instruction::Jmp {
            label: parse_label_operand(line, operands)?,
        },
        "JEZ" => Instruction::Jez {
            label: parse_label_operand(line, operands)?,
        },
        "JNZ" => Instruction::Jnz {
            label: parse_label_operand(line, operands)?,
        },
        "JGZ" => Instruction::Jgz {
            label: parse_label_operand(line, operands)?,
        },
        "JLZ" => Instruction::Jlz {
            label: parse_label_operand(line, operands)?,
        },
        "JRO" => Instruction::Jro {
            from: parse_single_input(line, operands)?,
        },
        _ => {
            return Err(AsmError::UnknownInstruction {
                line,
                mnemonic: mnemonic.clone(),
            })
        }
    };
    out.push(inst);
    Ok(out)
}

fn parse_mov(line: usize, operands: &[Token]) -> Result<Instruction> {
    let comma = operands
        .iter()
        .position(|token| *token == Token::Comma)
        .ok_or_else(|| AsmError::SyntaxError {
            line,
            message: "MOV expects two operands separated by a comma".to_string(),
        })?;
    let from = parse_input_ref(line, &operands[..comma])?;
    let to = parse_output_ref(line, &operands[comma + 1..])?;
    Ok(Instruction::Mov { from, to })
}

fn parse_single_input(line: usize, operands: &[Token]) -> Result<InputRef> {
    parse_input_ref(line, operands)
}

fn parse_input_ref(line: usize, tokens: &[Token]) -> Result<InputRef> {
    match tokens {
        [Token::InPort(slot)] => Ok(InputRef::Slot(*slot)),
        [Token::Number(value)] => Ok(InputRef::Value(*value)),
        [Token::Identifier(name)] if name.eq_ignore_ascii_case("ACC") => Ok(InputRef::Acc),
        [Token::Identifier(name)] if name.eq_ignore_ascii_case("NIL") => Ok(InputRef::Nil),
        _ => Err(AsmError::SyntaxError {
            line,
            message: "expected an input reference (<n, ACC, NIL or a number)".to_string(),
        }),
    }
}

fn parse_output_ref(line: usize, tokens: &[Token]) -> Result<OutputRef> {
    match tokens {
        [Token::OutPort(slot)] => Ok(OutputRef::Slot(*slot)),
        [Token::Identifier(name)] if name.eq_ignore_ascii_case("ACC") => Ok(OutputRef::Acc),
        [Token::Identifier(name)] if name.eq_ignore_ascii_case("NIL") => Ok(OutputRef::Nil),
        _ => Err(AsmError::SyntaxError {
            line,
            message: "expected an output reference (>n, ACC or NIL)".to_string(),
        }),
    }
}

/// SAV/SWP address memory slots 1-based in the surface syntax; a bare
/// mnemonic means slot 1. Internally slots are 0-based.
fn parse_memory_slot(line: usize, operands: &[Token]) -> Result<usize> {
    match operands {
        [] => Ok(0),
        [Token::Number(n)] if *n >= 1 => Ok(*n as usize - 1),
        _ => Err(AsmError::SyntaxError {
            line,
            message: "expected a positive memory slot number".to_string(),
        }),
    }
}

fn parse_label_operand(line: usize, operands: &[Token]) -> Result<String> {
    match operands {
        [Token::Identifier(name)] => Ok(name.clone()),
        _ => Err(AsmError::SyntaxError {
            line,
            message: "expected a label name".to_string(),
        }),
    }
}

fn expect_no_operands(line: usize, mnemonic: &str, operands: &[Token]) -> Result<()> {
    if operands.is_empty() {
        Ok(())
    } else {
        Err(AsmError::SyntaxError {
            line,
            message: format!("{mnemonic} takes no operand"),
        })
    }
}
