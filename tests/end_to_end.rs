//! End-to-end tests for the TZ-IO toolchain
//!
//! These tests verify the complete workflow:
//! 1. Assemble source code into a Program
//! 2. Register it in an Environment
//! 3. Feed input rows through a driver and verify the sampled outputs

use tzio_asm::assemble;
use tzio_runtime::Environment;
use tzio_spec::Value;

fn rows(values: &[Value]) -> Vec<Vec<Option<Value>>> {
    values.iter().map(|&v| vec![Some(v)]).collect()
}

fn single_node_env(source: &str, memory_size: usize) -> Environment {
    let program = assemble(source).expect("Assembly failed");
    Environment::with_slots(2, &[0], &[1])
        .unwrap()
        .add_node("node", memory_size, &[0], &[1], program)
        .unwrap()
}

// ============================================================================
// Single-node machines
// ============================================================================

#[test]
fn test_increment_machine() {
    let source = "\
MOV <1, ACC
ADD 1
MOV ACC, >1
";
    let outputs: Vec<_> = single_node_env(source, 0)
        .run_on(rows(&[0, 12, -43]), 100)
        .collect();
    assert_eq!(outputs, vec![vec![Some(1)], vec![Some(13)], vec![Some(-42)]]);
}

#[test]
fn test_doubling_machine() {
    let source = "\
MOV <1, ACC
ADD ACC
MOV ACC, >1
";
    let outputs: Vec<_> = single_node_env(source, 0)
        .run_on(rows(&[1, 3, -4]), 100)
        .collect();
    assert_eq!(outputs, vec![vec![Some(2)], vec![Some(6)], vec![Some(-8)]]);
}

#[test]
fn test_conditional_machine_clamps_negatives() {
    // Emit the input if positive, else emit zero
    let source = "\
start:
    MOV <1, ACC
    JGZ emit
    MOV 0, ACC
emit:
    MOV ACC, >1
    JMP start
";
    let outputs: Vec<_> = single_node_env(source, 0)
        .run_on(rows(&[4, -7, 0, 9]), 200)
        .collect();
    assert_eq!(
        outputs,
        vec![vec![Some(4)], vec![Some(0)], vec![Some(0)], vec![Some(9)]]
    );
}

#[test]
fn test_jro_skips_instructions() {
    // JRO 2 skips the ADD: values pass through unchanged
    let source = "\
MOV <1, ACC
JRO 2
ADD 100
MOV ACC, >1
";
    let outputs: Vec<_> = single_node_env(source, 0)
        .run_on(rows(&[5, -1]), 100)
        .collect();
    assert_eq!(outputs, vec![vec![Some(5)], vec![Some(-1)]]);
}

// ============================================================================
// Multi-node machines
// ============================================================================

#[test]
fn test_sum_pipeline() {
    // Node 1 doubles the first input, node 2 increments the second, node 3
    // sums both; 5 slots: two external queues, two internal, one output
    let doubler = assemble("MOV <1, ACC\nADD ACC\nMOV ACC, >1\n").unwrap();
    let incrementer = assemble("MOV <1, ACC\nADD 1\nMOV ACC, >1\n").unwrap();
    let adder = assemble("MOV <1, ACC\nADD <2\nMOV ACC, >1\n").unwrap();

    let env = Environment::with_slots(5, &[0, 1], &[4])
        .unwrap()
        .add_node("double", 1, &[0], &[2], doubler)
        .unwrap()
        .add_node("incr", 1, &[1], &[3], incrementer)
        .unwrap()
        .add_node("sum", 1, &[2, 3], &[4], adder)
        .unwrap();

    let inputs = vec![
        vec![Some(0), Some(1)],
        vec![Some(10), Some(5)],
        vec![Some(-43), Some(86)],
    ];
    let outputs: Vec<_> = env.run_on(inputs, 100).collect();
    assert_eq!(outputs, vec![vec![Some(2)], vec![Some(26)], vec![Some(1)]]);
}

#[test]
fn test_machine_is_deterministic() {
    let source = "\
MOV <1, ACC
SUB 3
NEG
MOV ACC, >1
";
    let inputs = [7, -2, 0, 100, -100];
    let reference: Vec<_> = single_node_env(source, 0)
        .run_on(rows(&inputs), 200)
        .collect();
    for _ in 0..5 {
        let again: Vec<_> = single_node_env(source, 0)
            .run_on(rows(&inputs), 200)
            .collect();
        assert_eq!(again, reference);
    }
}
