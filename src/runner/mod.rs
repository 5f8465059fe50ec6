//! The runner drives a [`Session`](crate::Session) from a line-oriented input
//! to an output writer: it shows the prompt, reads one line, feeds it to the
//! session and writes the reply, until the user chooses to exit.
//!
//! This module provides both a synchronous and an asynchronous runner implementations.
//!
mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;

/// Drops the trailing `\n` or `\r\n` of a line read from the input.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
