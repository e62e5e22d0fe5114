//! Terminal output formatting.
//!
//! Everything here writes to a caller-supplied `io::Write` so the
//! command handlers can target stdout and tests can target a buffer.

pub mod json_printer;
pub mod token_printer;
