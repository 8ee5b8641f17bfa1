//! Assembling complete programs through the public API

use tzio_asm::assemble;
use tzio_spec::{InputRef, Instruction, OutputRef};

#[test]
fn test_assembled_program_compiles() {
    let source = "\
start:
    MOV <1, ACC
    JEZ skip
    ADD <2
skip:
    MOV ACC, >1
    JMP start
";
    let program = assemble(source).unwrap();
    let compiled = program.compile().unwrap();

    assert_eq!(compiled.len(), 4);
    assert_eq!(compiled.labels().index_of("start"), 0);
    assert_eq!(compiled.labels().index_of("skip"), 3);
}

#[test]
fn test_rendered_instructions_reassemble() {
    let ops = vec![
        Instruction::Label {
            name: "top".to_string(),
        },
        Instruction::Mov {
            from: InputRef::Slot(1),
            to: OutputRef::Acc,
        },
        Instruction::Sub {
            from: InputRef::Value(3),
        },
        Instruction::Jlz {
            label: "top".to_string(),
        },
        Instruction::Mov {
            from: InputRef::Acc,
            to: OutputRef::Slot(1),
        },
    ];
    let rendered: String = ops
        .iter()
        .map(|op| format!("{op}\n"))
        .collect();
    let program = assemble(&rendered).unwrap();
    assert_eq!(program.ops, ops);
}

#[test]
fn test_mixed_case_mnemonics() {
    let program = assemble("mov <1, acc\nAdd 2\nneg\n").unwrap();
    assert_eq!(
        program.ops,
        vec![
            Instruction::Mov {
                from: InputRef::Slot(1),
                to: OutputRef::Acc,
            },
            Instruction::Add {
                from: InputRef::Value(2),
            },
            Instruction::Neg,
        ]
    );
}
