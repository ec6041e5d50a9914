//! Greeting printed before the accumulator runs.

use std::io::{self, Write};

/// Value returned by [`hello_world`].
pub const GREETING: &str = "greeting";

/// Writes `Hello, world!` to `out` and returns [`GREETING`].
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn hello_world<W: Write>(out: &mut W) -> io::Result<&'static str> {
    writeln!(out, "Hello, world!")?;
    Ok(GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world_writes_line_and_returns_greeting() {
        let mut out = Vec::new();
        assert_eq!(hello_world(&mut out).unwrap(), "greeting");
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, world!\n");
    }
}
