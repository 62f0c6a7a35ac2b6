//! Error adapter for converting ShajaraError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Member file parse
//! errors point at the offending position in the source; every other error is
//! rendered as a plain coded report.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};
use shajara::ShajaraError;

/// Adapter for a member file parse error.
///
/// serde_json reports positions as 1-based line and column numbers; the
/// adapter turns them into a byte span over the source for miette.
pub struct DiagnosticAdapter<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Byte span of the reported position, clamped to the source.
    fn span(&self) -> SourceSpan {
        let offset = byte_offset(self.src, self.err.line(), self.err.column());
        let len = self.src[offset..].chars().next().map_or(0, char::len_utf8);
        SourceSpan::new(offset.into(), len)
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid member data")
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("shajara::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err.classify() {
            serde_json::error::Category::Syntax => "check the JSON syntax at the marked position",
            serde_json::error::Category::Data => {
                "each member needs an `id`; dates use the YYYY-MM-DD form"
            }
            serde_json::error::Category::Eof => "the file ended early; look for an unclosed bracket",
            serde_json::error::Category::Io => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(Some(message(self.err)), self.span());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-diagnostic [`ShajaraError`] variants.
pub struct ErrorAdapter<'a>(pub &'a ShajaraError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ShajaraError::Io(_) => "shajara::io",
            ShajaraError::Parse { .. } => "shajara::parse",
            ShajaraError::Config(_) => "shajara::config",
            ShajaraError::Export(_) => "shajara::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse error with its location in the member file.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Converts a 1-based line and column into a byte offset into `src`.
///
/// Positions past the end of a line or of the source are clamped.
fn byte_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let line_text = src[line_start..].split('\n').next().unwrap_or_default();

    let column_offset = line_text
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(line_text.len(), |(offset, _)| offset);
    line_start + column_offset
}

/// The serde_json message without its trailing position.
fn message(err: &serde_json::Error) -> String {
    let full = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    full.strip_suffix(&suffix).unwrap_or(&full).to_string()
}

/// Convert a [`ShajaraError`] into a list of reportable errors.
pub fn to_reportables(err: &ShajaraError) -> Vec<Reportable<'_>> {
    match err {
        ShajaraError::Parse { err: parse_err, src } => {
            vec![Reportable::Diagnostic(DiagnosticAdapter::new(parse_err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(src: &str) -> ShajaraError {
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        ShajaraError::new_parse_error(err, src)
    }

    #[test]
    fn test_parse_error_is_diagnostic() {
        let err = parse_error("[\n  { \"id\": 1,, }\n]");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "Invalid member data");
                assert_eq!(d.code().unwrap().to_string(), "shajara::parse");
                assert!(d.help().is_some());
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_label_points_at_error_position() {
        let src = "[\n  { \"id\": 1,, }\n]";
        let err = parse_error(src);
        let reportables = to_reportables(&err);

        let labels: Vec<_> = reportables[0].labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(&src[labels[0].offset()..labels[0].offset() + labels[0].len()], ",");
        assert!(!labels[0].label().unwrap().contains("line"));
    }

    #[test]
    fn test_non_parse_error() {
        let err = ShajaraError::Config("bad value".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad value");
                assert_eq!(e.code().unwrap().to_string(), "shajara::config");
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_byte_offset() {
        let src = "ab\ncdé\nf";
        assert_eq!(byte_offset(src, 1, 1), 0);
        assert_eq!(byte_offset(src, 2, 3), 5);
        assert_eq!(byte_offset(src, 3, 1), 8);
        // Past the end of a line clamps to the line end.
        assert_eq!(byte_offset(src, 1, 10), 2);
        // Past the end of the source clamps to its end.
        assert_eq!(byte_offset(src, 9, 1), src.len());
    }
}
