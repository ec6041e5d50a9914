//! Tally
//!
//! A running-total accumulator that keeps a chronological, append-only log
//! of every operation applied to it.
//!
//! # Overview
//!
//! This library provides:
//! - [`Accumulator`], generic over `f32` and `f64`
//! - [`Operation`] values whose text form is the history entry
//! - Parsing of operations from text, rejecting non-numeric operands
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  add / multiply  ┌──────────────────┐
//! │   Caller    │─────────────────►│   Accumulator    │
//! │ (tally bin) │◄─────────────────│  value + History │
//! └─────────────┘    new value     └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`] - Errors raised when parsing operations from text
//! - [`accumulator`] - The accumulator, its operations and history
//! - [`greeting`] - The greeting printed by the binary
//!
//! # Example
//!
//! ```
//! use tally::Accumulator;
//!
//! let mut acc = Accumulator::new();
//! assert_eq!(acc.multiply(10.0), 0.0);
//! assert_eq!(acc.add(5.0), 5.0);
//! assert_eq!(acc.history().len(), 2);
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod accumulator;
pub mod error;
pub mod greeting;

// Re-export commonly used types at the crate root
pub use accumulator::{Accumulator, History, Number, Operation};
pub use error::AccumulatorError;
