use std::fmt;

/// Error codes for compiler diagnostics.
///
/// Format: E#### where the first digit is the phase. Only the lexer
/// (E0xxx) reports errors today.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Integer literal out of range
    E0002,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
        }
    }

    /// Parse a code like `E0001` (case-insensitive).
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "E0001" => Some(ErrorCode::E0001),
            "E0002" => Some(ErrorCode::E0002),
            _ => None,
        }
    }

    /// Long-form explanation, shown by `whyc explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A string literal was opened with `\"` but not closed on the same line.\n\n\
                 String literals cannot contain raw line breaks, and there are no escape\n\
                 sequences, so a `\"` cannot appear inside a string either.\n\n\
                 Example:\n\n    greet(\"hello\n    world\")\n\n\
                 Close the string before the end of the line."
            }
            ErrorCode::E0002 => {
                "An integer literal does not fit in a signed 64-bit integer.\n\n\
                 Integer literals range from -9223372036854775808 to 9223372036854775807.\n\n\
                 Example:\n\n    def big() = 99999999999999999999"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
