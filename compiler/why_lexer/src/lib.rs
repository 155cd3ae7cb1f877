//! Lexer for WhyLang.
//!
//! Turns source text into classified, span-tagged [`Token`]s. Two entry
//! points coexist:
//!
//! - [`Tokenizer::next_token`] pulls one token at a time and returns
//!   `EndOfFile` forever once the input is exhausted.
//! - [`tokenize`] wraps a tokenizer in a lazy iterator that ends before
//!   `EndOfFile`.
//!
//! [`lex`] collects everything eagerly, keeping the trailing `EndOfFile`
//! token for parsers that want a sentinel.
//!
//! The only failure is a [`SyntaxError`] for a malformed literal; stray
//! characters become `TokenKind::Unknown` tokens instead.

mod keywords;
mod syntax_error;
mod tokenizer;
mod tokens;

pub use syntax_error::{SyntaxError, SyntaxErrorKind};
pub use tokenizer::{LexResult, Tokenizer};
pub use tokens::Tokens;
pub use why_ir::{Span, Token, TokenKind, TokenValue};
pub use why_lexer_core::TextCursor;

/// Lazily tokenize `source`.
///
/// The sequence ends before `EndOfFile`. Tokenizing the same text again
/// always produces the same sequence.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokenizer::new(source).into_iter()
}

/// Tokenize all of `source`, including the trailing `EndOfFile` token.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tracing::debug!(count = tokens.len(), "lexed");
    Ok(tokens)
}
