//! Conversion of phase errors into diagnostics.

use why_diagnostic::{Diagnostic, ErrorCode};
use why_lexer::{Span, SyntaxError, SyntaxErrorKind};

/// Render a `SyntaxError` as a diagnostic with code, label and notes.
#[cold]
pub fn render_syntax_error(err: &SyntaxError) -> Diagnostic {
    let span = err.span;
    match &err.kind {
        SyntaxErrorKind::UnexpectedNewline => Diagnostic::error(ErrorCode::E0001)
            .with_message(err.message())
            .with_label(span, "string literal is never closed")
            .with_secondary_label(Span::point(span.end), "line ends here")
            .with_note("string literals cannot span lines; close it with `\"` before the line ends"),

        SyntaxErrorKind::UnexpectedEndOfFile => Diagnostic::error(ErrorCode::E0001)
            .with_message(err.message())
            .with_label(span, "string literal is never closed")
            .with_note("add a closing `\"`"),

        SyntaxErrorKind::IntegerOutOfRange { .. } => Diagnostic::error(ErrorCode::E0002)
            .with_message(err.message())
            .with_label(span, "integer literal out of range")
            .with_note(format!(
                "integer literals must lie between {} and {}",
                i64::MIN,
                i64::MAX
            )),
    }
}
