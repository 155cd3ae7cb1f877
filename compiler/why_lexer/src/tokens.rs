//! Lazy token sequence.
//!
//! [`Tokens`] pulls one token per `next()` from a [`Tokenizer`]. The
//! `EndOfFile` sentinel is not yielded: the sequence simply ends. A syntax
//! error is yielded once, after which the sequence is exhausted.

use std::iter::FusedIterator;

use why_ir::Token;

use crate::tokenizer::{LexResult, Tokenizer};

/// Iterator over the substantive tokens of a source string.
///
/// Created by [`tokenize`](crate::tokenize) or by iterating a [`Tokenizer`].
/// Nothing is scanned until the consumer asks for the next item, so
/// stopping early leaves the rest of the input untouched.
#[derive(Clone, Debug)]
pub struct Tokens<'src> {
    tokenizer: Tokenizer<'src>,
    finished: bool,
}

impl<'src> Tokens<'src> {
    pub(crate) fn new(tokenizer: Tokenizer<'src>) -> Self {
        Tokens {
            tokenizer,
            finished: false,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.tokenizer.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests;
