//! Running-total accumulator with an operation log.
//!
//! This module holds the [`Accumulator`], which keeps a running numeric
//! value together with a chronological [`History`] of every operation
//! applied to it.
//!
//! # Architecture
//!
//! The accumulator module is organized into:
//! - `operation`: the [`Operation`] value, its log text and text parsing
//! - `history`: the append-only [`History`] log
//!
//! # Usage
//!
//! ```
//! use tally::accumulator::Accumulator;
//!
//! let mut acc = Accumulator::new();
//! assert_eq!(acc.add(5.0), 5.0);
//! assert_eq!(acc.multiply(3.0), 15.0);
//! assert_eq!(acc.history().as_slice(), ["Added 5", "Multiplied by 3"]);
//! ```

pub mod history;
pub mod operation;

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul};
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::AccumulatorError;

pub use history::History;
pub use operation::Operation;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Numeric types the accumulator can hold: `f32` and `f64`.
///
/// Float arithmetic is total, so `add` and `multiply` have no failure mode
/// for any operand. Results past the finite range become infinity and keep
/// accumulating under IEEE 754 rules. Integers are left out because their
/// arithmetic overflows.
///
/// ```compile_fail
/// let mut acc = tally::Accumulator::<i32>::new();
/// acc.add(1);
/// ```
pub trait Number:
    sealed::Sealed
    + Copy
    + Default
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Mul<Output = Self>
{
}

impl Number for f32 {}
impl Number for f64 {}

/// A running total plus the log of operations that produced it.
///
/// Created with a zero value and an empty history, and changed only through
/// [`add`](Self::add), [`multiply`](Self::multiply) and their
/// [`apply`](Self::apply) forms. Each call updates the value and appends
/// exactly one history entry.
///
/// Not synchronized: share it across threads behind a lock held around each
/// call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Accumulator<T = f64> {
    value: T,
    history: History,
}

impl<T: Number> Accumulator<T> {
    /// Creates an accumulator at zero with an empty history.
    pub fn new() -> Self {
        Self {
            value: T::default(),
            history: History::new(),
        }
    }

    /// Adds `number` to the running total and returns the new total.
    pub fn add(&mut self, number: T) -> T {
        self.apply(Operation::Add(number))
    }

    /// Multiplies the running total by `factor` and returns the new total.
    pub fn multiply(&mut self, factor: T) -> T {
        self.apply(Operation::Multiply(factor))
    }

    /// Applies `op`, records it in the history and returns the new total.
    pub fn apply(&mut self, op: Operation<T>) -> T {
        self.value = op.apply_to(self.value);
        self.history.record(op.to_string());

        debug!(
            operation = op.name(),
            operand = %op.operand(),
            value = %self.value,
            entries = self.history.len(),
            "applied operation"
        );

        self.value
    }

    /// Parses an operation from text and applies it.
    ///
    /// On error neither the value nor the history is touched.
    ///
    /// # Errors
    ///
    /// See [`Operation::parse`].
    pub fn apply_text(&mut self, verb: &str, operand: &str) -> Result<T, AccumulatorError> {
        let op = Operation::parse(verb, operand).inspect_err(|e| {
            debug!(verb, operand, error = %e, "rejected operation");
        })?;
        Ok(self.apply(op))
    }

    /// Returns the current running total.
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the log of applied operations, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }
}
