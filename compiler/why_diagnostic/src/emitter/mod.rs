//! Diagnostic emitters.
//!
//! Only human-readable terminal output exists today; the trait keeps the
//! driver independent of the output format.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in some output format.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary line for the number of errors reported.
    fn emit_summary(&mut self, error_count: usize);
}
