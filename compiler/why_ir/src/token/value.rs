use std::fmt;

use super::TokenKind;

/// Payload attached to a token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TokenValue {
    /// No payload. Carried by every kind except the three literal kinds.
    #[default]
    Null,
    Identifier(String),
    Integer(i64),
    /// String body with the quotes stripped.
    String(String),
}

impl TokenValue {
    /// Check the payload variant against the kind it is attached to.
    pub fn matches_kind(&self, kind: TokenKind) -> bool {
        match self {
            TokenValue::Null => !kind.expects_value(),
            TokenValue::Identifier(_) => kind == TokenKind::Identifier,
            TokenValue::Integer(_) => kind == TokenKind::Integer,
            TokenValue::String(_) => kind == TokenKind::String,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TokenValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Identifier(s) | TokenValue::String(s) => Some(s),
            TokenValue::Null | TokenValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TokenValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Null => f.write_str("null"),
            TokenValue::Identifier(name) => f.write_str(name),
            TokenValue::Integer(n) => write!(f, "{n}"),
            TokenValue::String(s) => write!(f, "{s:?}"),
        }
    }
}
