//! Diagnostic system for error reporting.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (why, and how to fix it)
//!
//! Phases produce their own error types; the driver converts them into
//! [`Diagnostic`]s and hands them to a [`DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, LabelStyle};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
