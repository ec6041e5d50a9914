//! Operations the accumulator can apply.
//!
//! An [`Operation`] pairs what to do with its operand. Its `Display` form is
//! exactly the entry written to the history log, so the log text and the
//! arithmetic always come from the same value.

use std::fmt;

use crate::error::AccumulatorError;

use super::Number;

/// A single operation applied to the running total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation<T> {
    /// Add the operand to the running total.
    Add(T),
    /// Multiply the running total by the operand.
    Multiply(T),
}

impl<T: Number> Operation<T> {
    /// Parses an operation from its name and operand text.
    ///
    /// The name is matched case-insensitively and checked before the
    /// operand, so `("pow", "x")` reports the unknown operation rather than
    /// the bad operand.
    ///
    /// # Errors
    ///
    /// - [`AccumulatorError::UnknownOperation`] if `verb` is not `add` or
    ///   `multiply`.
    /// - [`AccumulatorError::TypeMismatch`] if `operand` does not parse as `T`.
    pub fn parse(verb: &str, operand: &str) -> Result<Self, AccumulatorError> {
        let verb = verb.trim().to_ascii_lowercase();
        let build: fn(T) -> Self = match verb.as_str() {
            "add" => Operation::Add,
            "multiply" => Operation::Multiply,
            _ => return Err(AccumulatorError::UnknownOperation(verb)),
        };

        let number = operand
            .trim()
            .parse::<T>()
            .map_err(|_| AccumulatorError::TypeMismatch {
                operation: verb,
                input: operand.to_string(),
            })?;

        Ok(build(number))
    }

    /// Returns the operation name as accepted by [`Operation::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add(_) => "add",
            Operation::Multiply(_) => "multiply",
        }
    }

    /// Returns the operand.
    pub fn operand(&self) -> T {
        match *self {
            Operation::Add(n) | Operation::Multiply(n) => n,
        }
    }

    /// Computes the result of applying this operation to `value`.
    pub fn apply_to(&self, value: T) -> T {
        match *self {
            Operation::Add(n) => value + n,
            Operation::Multiply(n) => value * n,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add(n) => write!(f, "Added {n}"),
            Operation::Multiply(n) => write!(f, "Multiplied by {n}"),
        }
    }
}
