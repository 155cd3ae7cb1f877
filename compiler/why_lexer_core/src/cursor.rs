//! Scan window over an immutable source string.
//!
//! The cursor tracks two byte offsets into the source: `start`, where the
//! current lexeme begins, and `end`, one past the last character taken.
//! Every `take*` method moves `end` forward by whole characters; only
//! [`advance`](TextCursor::advance) and [`skip_while`](TextCursor::skip_while)
//! move `start`.
//!
//! # Invariant
//!
//! `start <= end <= source.len()`, and both offsets sit on UTF-8 character
//! boundaries. The current lexeme is always `source[start..end]`.
//!
//! # Size limit
//!
//! Offsets are `u32`. A source longer than `u32::MAX` bytes is scanned only
//! up to the last character boundary that fits; the rest reads as end of
//! input.

use why_ir::Span;

/// Mutable scan window over a borrowed source string.
///
/// Owned by a single tokenizer and lent to its sub-scanners by `&mut`.
#[derive(Clone, Debug)]
pub struct TextCursor<'src> {
    /// Source text, clipped to the `u32` offset range.
    source: &'src str,
    /// Start of the current lexeme (byte offset).
    start: u32,
    /// One past the last taken character (byte offset).
    end: u32,
    /// Most recently taken character.
    last: Option<char>,
}

/// Clip `source` to at most `u32::MAX` bytes, backing off to a char boundary.
fn clip_to_u32(source: &str) -> &str {
    let mut len = source.len().min(u32::MAX as usize);
    while !source.is_char_boundary(len) {
        len -= 1;
    }
    &source[..len]
}

/// Byte width of `c` as a `u32` offset delta.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "a UTF-8 encoded char is at most 4 bytes"
)]
fn width(c: char) -> u32 {
    c.len_utf8() as u32
}

impl<'src> TextCursor<'src> {
    /// Create a cursor with an empty window at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source: clip_to_u32(source),
            start: 0,
            end: 0,
            last: None,
        }
    }

    /// The full source text this cursor scans.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset where the current lexeme starts.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Byte offset one past the current lexeme.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Returns `true` when no characters remain past the window.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.end as usize >= self.source.len()
    }

    /// Text after the window.
    #[inline]
    fn rest(&self) -> &'src str {
        &self.source[self.end as usize..]
    }

    /// The next character, without consuming it.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The most recently taken character.
    ///
    /// After `take()` returns `true`, this is the character it consumed.
    #[inline]
    pub fn last(&self) -> Option<char> {
        self.last
    }

    /// Extend the window by one character.
    ///
    /// Returns `false` at end of input and leaves the window unchanged.
    #[inline]
    pub fn take(&mut self) -> bool {
        match self.peek_char() {
            Some(c) => {
                self.end += width(c);
                self.last = Some(c);
                true
            }
            None => false,
        }
    }

    /// Take the next character only if it equals `expected`.
    #[inline]
    pub fn take_if(&mut self, expected: char) -> bool {
        self.peek(|c| c == expected) && self.take()
    }

    /// Test the next character against `pred` without consuming it.
    ///
    /// Always `false` at end of input.
    #[inline]
    pub fn peek(&self, pred: impl FnOnce(char) -> bool) -> bool {
        self.peek_char().is_some_and(pred)
    }

    /// Take characters while `pred` holds for the next one.
    ///
    /// May take nothing. Stops at end of input.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek(&pred) {
            self.take();
        }
    }

    /// Take characters until `pred` holds for the next one.
    ///
    /// The matching character is left unconsumed. May take nothing.
    pub fn take_until(&mut self, pred: impl Fn(char) -> bool) {
        self.take_while(|c| !pred(c));
    }

    /// Take characters up to the first of three ASCII bytes, or end of input.
    ///
    /// Same result as `take_until(|ch| ch == a || ch == b || ch == c)` but uses
    /// `memchr3`. Non-ASCII needles could match inside a multi-byte
    /// character, so all three must be ASCII.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rest.len() <= source.len() which fits in u32"
    )]
    pub fn take_until_ascii3(&mut self, a: u8, b: u8, c: u8) {
        debug_assert!(a.is_ascii() && b.is_ascii() && c.is_ascii());
        let rest = self.rest();
        let offset = memchr::memchr3(a, b, c, rest.as_bytes()).unwrap_or(rest.len());
        if offset > 0 {
            self.last = rest[..offset].chars().next_back();
            self.end += offset as u32;
        }
    }

    /// Skip characters while `pred` holds, without accumulating a lexeme.
    ///
    /// Moves `start` along with `end`, so the skipped text never shows up in
    /// [`content`](Self::content) or [`span`](Self::span). Only valid on an
    /// empty window, before a token begins.
    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        debug_assert_eq!(self.start, self.end, "skip_while on a non-empty window");
        while let Some(c) = self.peek_char().filter(|&c| pred(c)) {
            self.end += width(c);
        }
        self.start = self.end;
    }

    /// Commit the current window and start an empty one where it ended.
    #[inline]
    pub fn advance(&mut self) {
        self.start = self.end;
    }

    /// Text of the current window.
    #[inline]
    pub fn content(&self) -> &'src str {
        &self.source[self.start as usize..self.end as usize]
    }

    /// Span of the current window.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}
