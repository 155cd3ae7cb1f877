//! Token types for the WhyLang lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Span`] it was scanned from
//! and an optional [`TokenValue`] payload.

mod kind;
mod value;

pub use kind::TokenKind;
pub use value::TokenValue;

use std::fmt;

use super::Span;

/// A classified token with its span in the source.
///
/// Tokens are immutable values: the tokenizer builds one per call and hands
/// ownership to the caller.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub span: Span,
    pub kind: TokenKind,
    pub value: TokenValue,
}

impl Token {
    /// Create a token carrying a payload.
    ///
    /// The payload variant must match the kind: `Identifier`, `Integer` and
    /// `String` carry their own variant, every other kind carries `Null`.
    #[inline]
    pub fn new(span: Span, kind: TokenKind, value: TokenValue) -> Self {
        debug_assert!(
            value.matches_kind(kind),
            "token value {value:?} does not match kind {kind:?}"
        );
        Token { span, kind, value }
    }

    /// Create a token without a payload.
    #[inline]
    pub fn simple(span: Span, kind: TokenKind) -> Self {
        Self::new(span, kind, TokenValue::Null)
    }

    /// Returns `true` for the end-of-file sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Null => write!(f, "{:?} @ {}", self.kind, self.span),
            value => write!(f, "{:?}({value}) @ {}", self.kind, self.span),
        }
    }
}
