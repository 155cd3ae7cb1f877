use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use why_ir::Span;

fn unterminated_string() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message("unterminated string: unexpected newline")
        .with_label(Span::new(6, 12), "string is never closed")
        .with_note("strings cannot span lines")
}

fn render(mut emitter: TerminalEmitter<Vec<u8>>, diagnostic: &Diagnostic) -> String {
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[test]
fn renders_snippet_with_source() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("main.why", "greet(\"hello\nworld\")");
    let text = render(emitter, &unterminated_string());
    assert_eq!(
        text,
        "error[E0001]: unterminated string: unexpected newline\n\
         \x20 --> main.why:1:7\n\
         \x20  |\n\
         \x201 | greet(\"hello\n\
         \x20  |       ^^^^^^ string is never closed\n\
         \x20 = note: strings cannot span lines\n\
         \n"
    );
}

#[test]
fn renders_raw_span_without_source() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let text = render(emitter, &unterminated_string());
    assert!(text.contains("--> 6..12: string is never closed"));
}

#[test]
fn empty_span_gets_one_caret() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("m")
        .with_label(Span::point(2), "here");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("f", "ab");
    let text = render(emitter, &diag);
    assert!(text.contains("  |   ^ here"), "{text}");
}

#[test]
fn secondary_label_uses_triple_colon() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("m")
        .with_secondary_label(Span::new(0, 1), "context");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("f", "x");
    let text = render(emitter, &diag);
    assert!(text.contains("::: f:1:1"), "{text}");
}

#[test]
fn colors_wrap_error_header() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    let text = render(emitter, &unterminated_string());
    assert!(text.starts_with("\x1b[1;31merror\x1b[0m"));
}

#[test]
fn summary_counts_errors() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(0);
    emitter.emit_summary(1);
    emitter.emit_summary(3);
    let text = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert_eq!(
        text,
        "error: aborting due to previous error\nerror: aborting due to 3 previous errors\n"
    );
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn color_mode_parse() {
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("sometimes"), None);
}
