//! The lexer's only error: a malformed literal.
//!
//! Unclassifiable characters are not errors; they become `Unknown` tokens
//! and the parser decides what to do with them. A `SyntaxError` ends
//! lexing: the tokenizer that raised it must not be used again.

use why_ir::Span;

/// A malformed literal, with the span of the text scanned so far.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct SyntaxError {
    /// WHERE: the literal's text up to the point of failure.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: SyntaxErrorKind,
}

/// What kind of syntax error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// A `\r` or `\n` appeared before the closing `"`.
    #[error("unterminated string: unexpected newline")]
    UnexpectedNewline,
    /// Input ended before the closing `"`.
    #[error("unterminated string: unexpected end-of-file")]
    UnexpectedEndOfFile,
    /// Integer literal outside the `i64` range.
    #[error("integer literal `{literal}` does not fit in 64 bits")]
    IntegerOutOfRange { literal: String },
}

impl SyntaxError {
    pub fn new(span: Span, kind: SyntaxErrorKind) -> Self {
        SyntaxError { span, kind }
    }

    /// Human-readable message, without the location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
