use std::fmt;

/// The closed set of token kinds.
///
/// `Def` and `Extern` are reserved words: they are scanned exactly like
/// identifiers and reclassified by keyword lookup.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Repeats forever once reached.
    EndOfFile,
    /// A character that starts no token. Not an error at this level.
    Unknown,

    Def,
    Extern,

    /// Identifier; the value holds the raw text.
    Identifier,
    /// Integer literal; the value holds the parsed number.
    Integer,
    /// String literal; the value holds the text between the quotes.
    String,

    LParen,    // (
    RParen,    // )
    Comma,     // ,
    Plus,      // +
    Star,      // *
    Slash,     // /
    Assign,    // =
}

impl TokenKind {
    /// Stable display name, used by tooling output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Unknown => "Unknown",
            TokenKind::Def => "Def",
            TokenKind::Extern => "Extern",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::String => "String",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::Comma => "Comma",
            TokenKind::Plus => "Plus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::Assign => "Assign",
        }
    }

    /// Returns `true` if tokens of this kind carry a non-null value.
    pub const fn expects_value(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Integer | TokenKind::String
        )
    }

    /// Map a single punctuation character to its kind.
    pub const fn from_punctuation(c: char) -> Option<TokenKind> {
        match c {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            ',' => Some(TokenKind::Comma),
            '+' => Some(TokenKind::Plus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '=' => Some(TokenKind::Assign),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
