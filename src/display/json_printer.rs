//! Pretty-printed JSON output.

use std::io::{self, Write};

use serde_json::Value;

/// Write a JSON value with 2-space indentation followed by a newline.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn print_json<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
