//! Dispatch-by-first-character tokenizer.
//!
//! Each call to [`Tokenizer::next_token`] skips whitespace, takes the first
//! significant character and walks [`DISPATCH`] in order. The first rule
//! whose classifier accepts the character runs its scanner; if none does,
//! [`scan_single`] emits a punctuation token or `Unknown`.
//!
//! Scanners receive the dispatch character and the cursor by `&mut`, and
//! finish through [`emit`] or [`fail`], which both commit the window exactly
//! once.

use tracing::{debug, trace};
use why_ir::{Token, TokenKind, TokenValue};
use why_lexer_core::TextCursor;

use crate::keywords;
use crate::syntax_error::{SyntaxError, SyntaxErrorKind};
use crate::tokens::Tokens;

/// Result of a single scan.
pub type LexResult<T> = Result<T, SyntaxError>;

/// Decides whether a rule applies to the dispatch character.
///
/// The cursor is positioned just past that character, so a classifier may
/// peek one character further.
type Classifier = fn(char, &TextCursor<'_>) -> bool;

/// Scans the rest of a token whose first character is already taken.
type Scanner = fn(char, &mut TextCursor<'_>) -> LexResult<Token>;

struct Rule {
    matches: Classifier,
    scan: Scanner,
}

/// Ordered dispatch table. Earlier rules win.
const DISPATCH: [Rule; 3] = [
    Rule {
        matches: starts_number,
        scan: scan_number,
    },
    Rule {
        matches: starts_string,
        scan: scan_string,
    },
    Rule {
        matches: starts_identifier,
        scan: scan_identifier,
    },
];

/// Pull-based tokenizer over one source string.
///
/// Holds no state between calls beyond the cursor position. After
/// `EndOfFile` every further call returns `EndOfFile` again. After a
/// [`SyntaxError`] the tokenizer must be discarded.
#[derive(Clone, Debug)]
pub struct Tokenizer<'src> {
    cursor: TextCursor<'src>,
}

impl<'src> Tokenizer<'src> {
    /// Create a tokenizer at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self::from_cursor(TextCursor::new(source))
    }

    /// Resume tokenizing from an existing cursor.
    ///
    /// Anything already taken into the cursor's window is committed first,
    /// so the next token starts where the window ends.
    pub fn from_cursor(mut cursor: TextCursor<'src>) -> Self {
        cursor.advance();
        Tokenizer { cursor }
    }

    /// Give the cursor back, positioned after the last emitted token.
    pub fn into_cursor(self) -> TextCursor<'src> {
        self.cursor
    }

    /// The source being tokenized.
    pub fn source(&self) -> &'src str {
        self.cursor.source()
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.cursor.skip_while(char::is_whitespace);

        let Some(first) = self.cursor.peek_char() else {
            return Ok(emit(&mut self.cursor, TokenKind::EndOfFile, TokenValue::Null));
        };
        self.cursor.take();

        let scan = DISPATCH
            .iter()
            .find(|rule| (rule.matches)(first, &self.cursor))
            .map_or(scan_single as Scanner, |rule| rule.scan);

        let token = scan(first, &mut self.cursor)?;
        trace!(kind = %token.kind, span = %token.span, "token");
        Ok(token)
    }
}

impl<'src> IntoIterator for Tokenizer<'src> {
    type Item = LexResult<Token>;
    type IntoIter = Tokens<'src>;

    fn into_iter(self) -> Tokens<'src> {
        Tokens::new(self)
    }
}

// ─── Emission ───────────────────────────────────────────────────────

/// Build a token from the current window and commit it.
fn emit(cursor: &mut TextCursor<'_>, kind: TokenKind, value: TokenValue) -> Token {
    let token = Token::new(cursor.span(), kind, value);
    cursor.advance();
    token
}

/// Build an error from the current window and commit it.
fn fail(cursor: &mut TextCursor<'_>, kind: SyntaxErrorKind) -> SyntaxError {
    let err = SyntaxError::new(cursor.span(), kind);
    cursor.advance();
    debug!(span = %err.span, "{}", err.kind);
    err
}

// ─── Classifiers ────────────────────────────────────────────────────

fn starts_number(first: char, cursor: &TextCursor<'_>) -> bool {
    first.is_ascii_digit() || (first == '-' && cursor.peek(|c| c.is_ascii_digit()))
}

fn starts_string(first: char, _: &TextCursor<'_>) -> bool {
    first == '"'
}

fn starts_identifier(first: char, _: &TextCursor<'_>) -> bool {
    first == '_' || first.is_alphabetic()
}

fn is_identifier_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

// ─── Scanners ───────────────────────────────────────────────────────

/// Digits after an optional leading `-`. No fraction or exponent syntax.
fn scan_number(_: char, cursor: &mut TextCursor<'_>) -> LexResult<Token> {
    cursor.take_while(|c| c.is_ascii_digit());
    let literal = cursor.content();
    match literal.parse::<i64>() {
        Ok(n) => Ok(emit(cursor, TokenKind::Integer, TokenValue::Integer(n))),
        Err(_) => {
            let literal = literal.to_owned();
            Err(fail(cursor, SyntaxErrorKind::IntegerOutOfRange { literal }))
        }
    }
}

/// Body runs to the next `"` on the same line. No escape sequences.
fn scan_string(_: char, cursor: &mut TextCursor<'_>) -> LexResult<Token> {
    cursor.take_until_ascii3(b'"', b'\r', b'\n');

    if cursor.peek(|c| c == '\r' || c == '\n') {
        return Err(fail(cursor, SyntaxErrorKind::UnexpectedNewline));
    }
    if !cursor.take_if('"') {
        return Err(fail(cursor, SyntaxErrorKind::UnexpectedEndOfFile));
    }

    // Both quotes are one byte; the span keeps them, the value drops them.
    let content = cursor.content();
    let body = content[1..content.len() - 1].to_owned();
    Ok(emit(cursor, TokenKind::String, TokenValue::String(body)))
}

fn scan_identifier(_: char, cursor: &mut TextCursor<'_>) -> LexResult<Token> {
    cursor.take_while(is_identifier_continue);
    let text = cursor.content();
    let token = match keywords::lookup(text) {
        Some(kind) => emit(cursor, kind, TokenValue::Null),
        None => {
            let name = text.to_owned();
            emit(cursor, TokenKind::Identifier, TokenValue::Identifier(name))
        }
    };
    Ok(token)
}

/// Fallback: one of `( ) , + * / =`, or an `Unknown` character.
fn scan_single(first: char, cursor: &mut TextCursor<'_>) -> LexResult<Token> {
    let kind = TokenKind::from_punctuation(first).unwrap_or(TokenKind::Unknown);
    Ok(emit(cursor, kind, TokenValue::Null))
}
