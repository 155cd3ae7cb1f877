//! Low-level scanning primitives for the WhyLang lexer.
//!
//! [`TextCursor`] owns a `[start, end)` window over an immutable source
//! string. Scanning grows the window forward one character class at a time;
//! [`TextCursor::advance`] commits the window once a token has been emitted.
//! Tools that only need character-level scanning can depend on this crate
//! without pulling in token classification.

mod cursor;

pub use cursor::TextCursor;
