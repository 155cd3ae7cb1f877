#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use why_diagnostic::ColorMode;
use why_lexer::{Span, SyntaxErrorKind};

use super::{format_tokens, parse_lex_options, LexOptions};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn formats_definition() {
    let listing = format_tokens("def add(a, b) a + b").unwrap();
    assert_eq!(
        listing,
        "1:1 Def\n\
         1:5 Identifier add\n\
         1:8 LParen\n\
         1:9 Identifier a\n\
         1:10 Comma\n\
         1:12 Identifier b\n\
         1:13 RParen\n\
         1:15 Identifier a\n\
         1:17 Plus\n\
         1:19 Identifier b\n\
         1:20 EndOfFile\n"
    );
}

#[test]
fn formats_literals_across_lines() {
    let listing = format_tokens("x = -42\ns = \"hi there\"\n").unwrap();
    assert_eq!(
        listing,
        "1:1 Identifier x\n\
         1:3 Assign\n\
         1:5 Integer -42\n\
         2:1 Identifier s\n\
         2:3 Assign\n\
         2:5 String \"hi there\"\n\
         3:1 EndOfFile\n"
    );
}

#[test]
fn columns_count_characters() {
    let listing = format_tokens("é ?").unwrap();
    assert_eq!(listing, "1:1 Identifier é\n1:3 Unknown\n1:4 EndOfFile\n");
}

#[test]
fn empty_source_is_only_end_of_file() {
    assert_eq!(format_tokens("").unwrap(), "1:1 EndOfFile\n");
}

#[test]
fn syntax_error_is_returned() {
    let err = format_tokens("a \"open").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEndOfFile);
    assert_eq!(err.span, Span::new(2, 7));
}

#[test]
fn options_default() {
    assert_eq!(parse_lex_options(&[]), Ok(LexOptions::default()));
}

#[test]
fn options_path_and_color_any_order() {
    let expected = LexOptions {
        path: Some("main.why".to_owned()),
        color: ColorMode::Never,
    };
    assert_eq!(
        parse_lex_options(&args(&["main.why", "--color=never"])),
        Ok(expected.clone())
    );
    assert_eq!(
        parse_lex_options(&args(&["--color=never", "main.why"])),
        Ok(expected)
    );
}

#[test]
fn options_reject_bad_color() {
    let err = parse_lex_options(&args(&["--color=sometimes"])).unwrap_err();
    assert!(err.contains("sometimes"));
}

#[test]
fn options_reject_unknown_flag_and_extra_path() {
    assert!(parse_lex_options(&args(&["--verbose"])).is_err());
    assert!(parse_lex_options(&args(&["a.why", "b.why"])).is_err());
}
