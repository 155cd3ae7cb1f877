use super::*;
use crate::syntax_error::SyntaxErrorKind;
use crate::tokenize;
use pretty_assertions::assert_eq;
use why_ir::TokenKind;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .map(|result| match result {
            Ok(token) => token.kind,
            Err(err) => panic!("unexpected syntax error in {source:?}: {err}"),
        })
        .collect()
}

#[test]
fn sequence_stops_before_end_of_file() {
    assert_eq!(
        kinds("x + 1"),
        vec![TokenKind::Identifier, TokenKind::Plus, TokenKind::Integer]
    );
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(tokenize("").count(), 0);
    assert_eq!(tokenize(" \n\t ").count(), 0);
}

#[test]
fn error_is_yielded_once_then_fused() {
    let mut tokens = tokenize("a \"oops");
    assert!(matches!(tokens.next(), Some(Ok(ref t)) if t.kind == TokenKind::Identifier));
    let Some(Err(err)) = tokens.next() else {
        panic!("expected a syntax error");
    };
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEndOfFile);
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
}

#[test]
fn consumer_can_stop_early() {
    // The unterminated string is never reached.
    let first_two: Vec<_> = tokenize("a b \"unterminated").take(2).collect();
    assert_eq!(first_two.len(), 2);
    assert!(first_two.iter().all(Result::is_ok));
}

#[test]
fn tokenizer_into_iter_matches_tokenize() {
    let source = "def f(a) = a * 2";
    let via_tokenizer: Vec<_> = Tokenizer::new(source).into_iter().collect();
    let via_tokenize: Vec<_> = tokenize(source).collect();
    assert_eq!(via_tokenizer, via_tokenize);
}

#[test]
fn exhausted_sequence_stays_empty() {
    let mut tokens = tokenize("x");
    assert!(tokens.next().is_some());
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
}
