//! WhyLang IR - shared front-end types
//!
//! This crate contains the data model produced by the lexer and consumed by
//! the parser:
//! - Spans for source locations
//! - Tokens, token kinds and token payloads
//!
//! Every type is a plain value: `Clone`, `Eq`, `Hash` and `Debug`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenValue};
