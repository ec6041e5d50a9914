//! Error types for tally.
//!
//! Accumulator operations on typed numbers cannot fail. Errors only appear
//! at the text boundary, where an operation name and operand arrive as
//! strings and have to be parsed first.

use thiserror::Error;

/// Errors raised while turning text into an accumulator operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccumulatorError {
    /// The operand could not be read as a number.
    #[error("type mismatch: {operation} expects a number, got {input:?}")]
    TypeMismatch {
        /// The operation that rejected the operand.
        operation: String,
        /// The rejected operand text.
        input: String,
    },

    /// The operation name is not one the accumulator knows.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = AccumulatorError::TypeMismatch {
            operation: "add".to_string(),
            input: "five".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "type mismatch: add expects a number, got \"five\""
        );
    }

    #[test]
    fn test_unknown_operation_display() {
        let err = AccumulatorError::UnknownOperation("divide".to_string());
        assert_eq!(err.to_string(), "unknown operation: divide");
    }
}
