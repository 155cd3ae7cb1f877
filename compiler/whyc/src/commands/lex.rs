//! The `lex` command: print the token stream of a source file.

use std::fmt::Write as _;
use std::io::IsTerminal;

use why_diagnostic::span_utils::LineOffsetTable;
use why_diagnostic::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use why_lexer::{SyntaxError, TokenValue, Tokenizer};

use super::read_file;
use crate::problem::render_syntax_error;

/// Options accepted after `whyc lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub path: Option<String>,
    pub color: ColorMode,
}

/// Parse the arguments following `lex`.
///
/// Accepts one positional path and `--color=auto|always|never` in any order.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::parse(value).ok_or_else(|| {
                format!("invalid --color value '{value}' (expected auto, always or never)")
            })?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if options.path.is_none() {
            options.path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }
    Ok(options)
}

/// Render every token of `source`, one per line, up to and including
/// `EndOfFile`.
///
/// Lines read `<line>:<column> <Kind>` followed by the value when the token
/// carries one. Positions are 1-based and columns count characters.
pub fn format_tokens(source: &str) -> Result<String, SyntaxError> {
    let lines = LineOffsetTable::build(source);
    let mut tokenizer = Tokenizer::new(source);
    let mut out = String::new();
    loop {
        let token = tokenizer.next_token()?;
        let (line, col) = lines.offset_to_line_col(source, token.span.start);
        // Writing to a String cannot fail.
        let _ = match &token.value {
            TokenValue::Null => writeln!(out, "{line}:{col} {}", token.kind),
            value => writeln!(out, "{line}:{col} {} {value}", token.kind),
        };
        if token.is_eof() {
            return Ok(out);
        }
    }
}

/// Lex a file and print its token stream.
///
/// On a syntax error, renders the error against the source and exits with
/// status 1 without printing any tokens.
pub fn lex_file(path: &str, color: ColorMode) {
    let content = read_file(path);
    tracing::debug!(path, bytes = content.len(), "lexing file");

    let listing = format_tokens(&content);
    match listing {
        Ok(listing) => print!("{listing}"),
        Err(err) => {
            let is_tty = std::io::stderr().is_terminal();
            let mut emitter = TerminalEmitter::stderr(color, is_tty).with_source(path, content);
            emitter.emit(&render_syntax_error(&err));
            emitter.emit_summary(1);
            emitter.flush();
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
