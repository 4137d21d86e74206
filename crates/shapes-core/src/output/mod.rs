//! Text output sinks for the demonstration side effects.
//!
//! Shapes print a line describing their color, and rectangles print a line
//! describing their area.  Rather than calling `println!` directly, every
//! entity writes to a [`Console`] supplied by the caller.
//!
//! # Testability
//!
//! The `Console` trait lets unit tests capture output with [`BufferConsole`]
//! (or a `mockall` mock) instead of reading the process's stdout.

use std::io::{self, Write};

use tracing::{info, warn};

mod buffer;

pub use buffer::BufferConsole;

/// Destination for demonstration text, one line at a time.
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Writes a single line.  The line carries no trailing newline.
    fn write_line(&mut self, line: &str);
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

/// Prints every line to the process's standard output.
///
/// A closed stdout (e.g. output piped into `head`) does not panic: a broken
/// pipe is dropped silently and any other write error is logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&mut self, line: &str) {
        write_line_to(&mut io::stdout().lock(), line);
    }
}

fn write_line_to(writer: &mut impl Write, line: &str) {
    if let Err(e) = writeln!(writer, "{line}") {
        if e.kind() != io::ErrorKind::BrokenPipe {
            warn!("failed writing to stdout: {e}");
        }
    }
}

/// Forwards every line to `tracing` as an `INFO` event with target `shapes`.
///
/// Useful when the demonstration runs alongside other structured logs and
/// the lines should pick up the subscriber's formatting and filtering.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn write_line(&mut self, line: &str) {
        info!(target: "shapes", "{line}");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
