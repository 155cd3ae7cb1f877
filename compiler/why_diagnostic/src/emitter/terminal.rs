//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support and,
//! when the source text is attached, a `line:col` location and a caret
//! snippet under the offending text.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` flag value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text attached to an emitter for snippet rendering.
struct SourceFile {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source file the diagnostics point into.
    ///
    /// Without it, locations print as raw byte spans.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(SourceFile {
            path: path.into(),
            lines: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    /// Consume the emitter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    /// Write `--> path:line:col` and, for primary labels, the snippet.
    fn write_label(&mut self, label: &Label) {
        let marker = if label.is_primary() { "-->" } else { ":::" };
        let Some(source) = self.source.take() else {
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_label_message(label);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = source.lines.offset_to_line_col(&source.text, label.span.start);
        let _ = writeln!(self.writer, "  {marker} {}:{line}:{col}", source.path);

        if let Some(text) = source.lines.line_text(&source.text, line) {
            let gutter = line.to_string();
            let pad = " ".repeat(gutter.len());
            self.write_colored(&format!(" {pad} |"), colors::GUTTER);
            let _ = writeln!(self.writer);
            self.write_colored(&format!(" {gutter} |"), colors::GUTTER);
            let _ = writeln!(self.writer, " {text}");
            self.write_colored(&format!(" {pad} |"), colors::GUTTER);

            // Underline within this line only; at least one caret.
            let before = (col - 1) as usize;
            let line_rest = text.chars().count().saturating_sub(before);
            let span_chars = source
                .text
                .get(label.span.to_range())
                .map_or(1, |s| s.chars().count());
            let width = span_chars.min(line_rest).max(1);
            let carets = format!("{}{}", " ".repeat(before), "^".repeat(width));
            let _ = write!(self.writer, " ");
            if label.is_primary() {
                self.write_colored(&carets, colors::ERROR);
            } else {
                self.write_colored(&carets, colors::GUTTER);
            }
            let _ = write!(self.writer, " ");
        } else {
            let _ = write!(self.writer, "  ");
        }
        self.write_label_message(label);
        let _ = writeln!(self.writer);

        self.source = Some(source);
    }

    fn write_label_message(&mut self, label: &Label) {
        let color = if label.is_primary() {
            colors::ERROR
        } else {
            colors::GUTTER
        };
        self.write_colored(&label.message, color);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::NOTE);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(self.writer, ": aborting due to {error_count} previous errors");
        }
    }
}

#[cfg(test)]
mod tests;
