use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::io;
use thiserror::Error;

/// Half-open byte range into the current input line. Used for diagnostics
/// only, never for semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }

    /// Zero-width span, as carried by the `Eof` token.
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

/// A syntax problem found while parsing one input line. Diagnostics are
/// carried as data; the parser never fails with an error or panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Writes the compact two-line excerpt used by the REPL: the offending
    /// source line, then a tilde underline covering the span's columns.
    /// The underline is at least one character wide so zero-width spans
    /// (end of input) still point somewhere.
    pub fn render(&self, source: &str, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "error: {}", self.message)?;
        writeln!(out, "{}", source)?;
        writeln!(
            out,
            "{}{}",
            " ".repeat(self.span.start),
            "~".repeat((self.span.end - self.span.start).max(1))
        )
    }

    /// Prints a rich ariadne report for the non-interactive modes. `source`
    /// is the whole file and `offset` the byte position of the offending
    /// line within it; spans are line-relative and get shifted here.
    pub fn report(&self, source: &str, filename: &str, offset: usize) {
        // At least one character wide, clamped into the source so a
        // zero-width end-of-line span still labels something.
        let end = (offset + self.span.end)
            .max(offset + self.span.start + 1)
            .min(source.len());
        let start = (offset + self.span.start).min(end.saturating_sub(1));

        Report::build(ReportKind::Error, filename, start)
            .with_message(format!(
                "{}: {}",
                "Parse Error".fg(Color::Yellow),
                self.message
            ))
            .with_label(
                Label::new((filename, start..end))
                    .with_message(&self.message)
                    .with_color(Color::Yellow),
            )
            .finish()
            .print((filename, Source::from(source)))
            .unwrap();
    }
}

/// Arithmetic failures during evaluation. Both cases are reported errors
/// rather than process traps or silent wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(diagnostic: &Diagnostic, source: &str) -> String {
        let mut out = Vec::new();
        diagnostic.render(source, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn underline_covers_span() {
        let diagnostic = Diagnostic::new("Unexpected token", Span::new(2, 3));
        assert_eq!(
            rendered(&diagnostic, "1+%2"),
            "error: Unexpected token\n1+%2\n  ~\n"
        );
    }

    #[test]
    fn zero_width_span_gets_one_tilde() {
        let diagnostic = Diagnostic::new(
            "Expected closing ')' at end of expression",
            Span::empty(4),
        );
        assert_eq!(
            rendered(&diagnostic, "(1+2"),
            "error: Expected closing ')' at end of expression\n(1+2\n    ~\n"
        );
    }

    #[test]
    fn multi_character_span() {
        let diagnostic = Diagnostic::new("Integer literal out of range", Span::new(0, 5));
        assert_eq!(
            rendered(&diagnostic, "99999"),
            "error: Integer literal out of range\n99999\n~~~~~\n"
        );
    }
}
