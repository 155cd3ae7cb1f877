//! Reserved-word table.
//!
//! Keywords are scanned as identifiers and then reclassified here. The
//! lookup is exact and case-sensitive: `Def` and `DEF` stay identifiers.

use why_ir::TokenKind;

/// Look up a reserved word by its text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text {
        "def" => Some(TokenKind::Def),
        "extern" => Some(TokenKind::Extern),
        _ => None,
    }
}
