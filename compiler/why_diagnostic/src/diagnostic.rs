//! The `Diagnostic` value and its parts.
//!
//! A diagnostic is built once by the driver from a phase error, then handed
//! to an emitter. It never refers back to the error it came from.

use std::fmt;

use why_ir::Span;

use crate::ErrorCode;

/// How a label is drawn.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelStyle {
    /// Where the problem is. Rendered with `-->` and a caret underline.
    Primary,
    /// Related context. Rendered with `:::`.
    Secondary,
}

/// A message attached to a span of source text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub style: LabelStyle,
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(style: LabelStyle, span: Span, message: impl Into<String>) -> Self {
        Label {
            style,
            span,
            message: message.into(),
        }
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        self.style == LabelStyle::Primary
    }
}

/// A reportable error: code, headline, labelled spans and trailing notes.
///
/// Every diagnostic is an error; the lexer has no warnings.
///
/// Built with the `with_*` methods:
///
/// ```
/// use why_diagnostic::{Diagnostic, ErrorCode};
/// use why_ir::Span;
///
/// let diag = Diagnostic::error(ErrorCode::E0001)
///     .with_message("unterminated string: unexpected end-of-file")
///     .with_label(Span::new(4, 9), "string literal is never closed");
/// assert_eq!(diag.primary_span(), Some(Span::new(4, 9)));
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be emitted or returned"]
pub struct Diagnostic {
    pub code: ErrorCode,
    /// One-line headline, printed after `error[CODE]: `.
    pub message: String,
    /// In insertion order; the first primary label locates the diagnostic.
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Mark where the problem is.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labelled(LabelStyle::Primary, span, message)
    }

    /// Point at related source text.
    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labelled(LabelStyle::Secondary, span, message)
    }

    fn labelled(mut self, style: LabelStyle, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(style, span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(|label| label.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}
