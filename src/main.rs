//! Tally - Entry Point
//!
//! Greets, runs an accumulator through one addition and one
//! multiplication, and prints the results.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tally::accumulator::{Accumulator, Operation};
use tally::greeting::hello_world;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Running-total accumulator with an operation log.
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number to add to the starting total.
    #[arg(long, default_value = "5", value_parser = parse_operand::<AddOp>)]
    add: f64,

    /// Factor to multiply the total by afterwards.
    #[arg(long, default_value = "3", value_parser = parse_operand::<MultiplyOp>)]
    multiply: f64,

    /// Print every history entry after the run.
    #[arg(long)]
    show_history: bool,

    /// Print the final accumulator state as JSON.
    #[arg(long)]
    json: bool,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

/// Names the operation an operand flag feeds, so bad input is reported
/// against it.
trait OperandFlag {
    const VERB: &'static str;
}

struct AddOp;
struct MultiplyOp;

impl OperandFlag for AddOp {
    const VERB: &'static str = "add";
}

impl OperandFlag for MultiplyOp {
    const VERB: &'static str = "multiply";
}

/// Parses an operand through the same path the library uses for text input.
fn parse_operand<F: OperandFlag>(input: &str) -> std::result::Result<f64, String> {
    Operation::<f64>::parse(F::VERB, input)
        .map(|op| op.operand())
        .map_err(|e| e.to_string())
}

/// Initializes the tracing subscriber, logging to stderr.
fn init_tracing(level: Level) -> Result<()> {
    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tally={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

/// Greets, applies the configured operations and writes the results to `out`.
fn run<W: Write>(args: &Args, out: &mut W) -> Result<Accumulator<f64>> {
    let greeting = hello_world(out).context("failed to write greeting")?;
    info!(greeting, "greeted");

    let mut acc = Accumulator::<f64>::new();

    let result = acc.add(args.add);
    writeln!(out, "Result: {result}")?;

    let result = acc.multiply(args.multiply);
    writeln!(out, "Final result: {result}")?;

    if args.show_history {
        for entry in acc.history() {
            writeln!(out, "{entry}")?;
        }
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &acc)
            .context("failed to serialize accumulator")?;
        writeln!(out)?;
    }

    Ok(acc)
}

/// Main entry point.
fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level)?;

    let acc = run(&args, &mut io::stdout().lock())?;

    info!(
        value = acc.value(),
        entries = acc.history().len(),
        "accumulator run complete"
    );

    Ok(())
}
