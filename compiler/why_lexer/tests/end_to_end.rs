//! End-to-end tokenizer tests through the public API only.

use pretty_assertions::assert_eq;
use why_lexer::{lex, tokenize, Span, SyntaxErrorKind, TextCursor, TokenKind, TokenValue, Tokenizer};

fn ident(name: &str) -> TokenValue {
    TokenValue::Identifier(name.to_owned())
}

#[test]
fn function_definition_through_lazy_sequence() {
    let values: Vec<_> = tokenize("def add(x, y) = x + y")
        .map(|r| match r {
            Ok(token) => (token.kind, token.value),
            Err(err) => panic!("unexpected error: {err}"),
        })
        .collect();
    assert_eq!(
        values,
        vec![
            (TokenKind::Def, TokenValue::Null),
            (TokenKind::Identifier, ident("add")),
            (TokenKind::LParen, TokenValue::Null),
            (TokenKind::Identifier, ident("x")),
            (TokenKind::Comma, TokenValue::Null),
            (TokenKind::Identifier, ident("y")),
            (TokenKind::RParen, TokenValue::Null),
            (TokenKind::Assign, TokenValue::Null),
            (TokenKind::Identifier, ident("x")),
            (TokenKind::Plus, TokenValue::Null),
            (TokenKind::Identifier, ident("y")),
        ]
    );
}

#[test]
fn eager_lex_keeps_end_of_file() {
    let Ok(tokens) = lex("extern sin(x)") else {
        panic!("expected tokens");
    };
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Extern,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::RParen,
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(tokens[5].span, Span::point(13));
}

#[test]
fn eager_lex_reports_first_error() {
    let Err(err) = lex("greet(\"hello\nworld\")") else {
        panic!("expected a syntax error");
    };
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedNewline);
    assert_eq!(err.span, Span::new(6, 12));
}

#[test]
fn unknown_tokens_flow_through_to_the_consumer() {
    let kinds: Vec<_> = tokenize("x @ y # z")
        .filter_map(Result::ok)
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Unknown,
            TokenKind::Identifier,
            TokenKind::Unknown,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn string_and_integer_literals() {
    let Ok(tokens) = lex("print(\"total\", -12 * 3)") else {
        panic!("expected tokens");
    };
    assert_eq!(tokens[2].value, TokenValue::String("total".into()));
    assert_eq!(tokens[2].span, Span::new(6, 13));
    assert_eq!(tokens[4].value, TokenValue::Integer(-12));
    assert_eq!(tokens[6].value, TokenValue::Integer(3));
}

#[test]
fn fresh_tokenizers_agree() {
    let source = "def f(a, b) = a / b + \"x\" * 7";
    let first: Vec<_> = tokenize(source).collect();
    let second: Vec<_> = tokenize(source).collect();
    assert_eq!(first, second);
}

#[test]
fn next_token_and_lazy_sequence_agree() {
    let source = "def g(n) = n * n";
    let mut tokenizer = Tokenizer::new(source);
    let mut pulled = Vec::new();
    loop {
        let Ok(token) = tokenizer.next_token() else {
            panic!("unexpected error");
        };
        if token.is_eof() {
            break;
        }
        pulled.push(token);
    }
    let lazy: Vec<_> = tokenize(source).filter_map(Result::ok).collect();
    assert_eq!(pulled, lazy);
}

#[test]
fn shared_cursor_across_tokenizers() {
    let mut cursor = TextCursor::new("  alpha beta");
    cursor.skip_while(char::is_whitespace);

    let mut tokenizer = Tokenizer::from_cursor(cursor);
    let Ok(alpha) = tokenizer.next_token() else {
        panic!("expected alpha");
    };
    assert_eq!(alpha.span, Span::new(2, 7));

    let rest: Vec<_> = Tokenizer::from_cursor(tokenizer.into_cursor())
        .into_iter()
        .filter_map(Result::ok)
        .collect();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].value, ident("beta"));
}
