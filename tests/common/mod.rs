//! Common test helpers and utilities.

#![allow(dead_code)]

use tally::accumulator::Operation;

/// Reference result: folds `ops` left to right starting from zero.
pub fn fold_reference(ops: &[Operation<f64>]) -> f64 {
    ops.iter().fold(0.0, |value, op| op.apply_to(value))
}

/// The history text each operation should leave behind, in order.
pub fn expected_history(ops: &[Operation<f64>]) -> Vec<String> {
    ops.iter()
        .map(|op| match op {
            Operation::Add(n) => format!("Added {n}"),
            Operation::Multiply(n) => format!("Multiplied by {n}"),
        })
        .collect()
}

/// A mixed sequence with fractions, negatives, zeros and repeats.
pub fn mixed_sequence() -> Vec<Operation<f64>> {
    vec![
        Operation::Multiply(4.0),
        Operation::Add(0.25),
        Operation::Add(3.0),
        Operation::Add(3.0),
        Operation::Multiply(-2.0),
        Operation::Add(0.0),
        Operation::Multiply(1.0),
        Operation::Add(-10.0),
        Operation::Multiply(0.0),
        Operation::Add(42.0),
    ]
}
