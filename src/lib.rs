#![allow(clippy::module_inception)]

use std::{io::Write, path::Path, sync::Once};

use tracing::{debug, info};

use crate::{
    errors::{
        errors::{Error, ErrorImpl, ErrorTip},
        reporter::Diagnostics,
    },
    lexer::lexer::{Scanner, ScannerConfig},
    reader::reader::Reader,
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod reader;

/// Line and column of a source byte. Lines are 1-based; the first character
/// of a line is at column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=scanner=debug` or
/// `RUST_LOG=scanner=trace` (the latter logs every token).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

/// Opens `path` and writes one line per token to `sink`.
///
/// Returns the diagnostics collected during the pass. Fails only when the
/// input cannot be opened (before any token is written) or the sink rejects
/// a write.
pub fn scan_file<W: Write>(
    path: impl AsRef<Path>,
    sink: &mut W,
    config: ScannerConfig,
) -> Result<Diagnostics, Error> {
    let path = path.as_ref();
    info!(path = %path.display(), "scanning file");

    let reader = Reader::open(path)?;
    scan_reader(reader, sink, config)
}

/// Same as [`scan_file`] for source text already in memory.
pub fn scan<W: Write>(
    source: impl AsRef<[u8]>,
    sink: &mut W,
    config: ScannerConfig,
) -> Result<Diagnostics, Error> {
    scan_reader(Reader::new(source.as_ref().to_vec()), sink, config)
}

fn scan_reader<W: Write>(
    reader: Reader,
    sink: &mut W,
    config: ScannerConfig,
) -> Result<Diagnostics, Error> {
    let mut scanner = Scanner::with_config(reader, Diagnostics::new(), config);
    let mut count = 0usize;

    loop {
        let token = scanner.next_token();
        if token.is_eof() {
            break;
        }

        writeln!(sink, "{}", token).map_err(|err| {
            Error::new(
                ErrorImpl::OutputFailure {
                    reason: err.to_string(),
                },
                token.position,
            )
        })?;
        count += 1;
    }

    let diagnostics = scanner.into_reporter();
    debug!(tokens = count, diagnostics = diagnostics.len(), "scan finished");
    Ok(diagnostics)
}

/// Returns the text of the 1-based `line` in `source`, without its line
/// terminator.
pub fn get_line(source: &[u8], line: u32) -> Option<String> {
    let index = (line as usize).checked_sub(1)?;
    let text = source.split(|byte| *byte == b'\n').nth(index)?;
    let text = text.strip_suffix(b"\r").unwrap_or(text);

    Some(String::from_utf8_lossy(text).into_owned())
}

/// Renders a diagnostic with the offending source line and a caret under the
/// reported column.
pub fn render_diagnostic(error: &Error, source: &[u8], file: &str) -> String {
    /*
        Error: InvalidSymbol
        -> example.kpl
          |
        3 | x := @;
          | -----^
    */

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}:{}\n", file, error));

    let position = error.get_position();
    let Some(line_text) = get_line(source, position.line) else {
        return rendered;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    let arrows = position.column.max(1) as usize;

    rendered.push_str(&format!("{:>padding$}\n", "|"));
    rendered.push_str(&format!("{} | {}\n", line_string, line_text));
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_get_line() {
        let source = b"Hello, world!\r\nsecond\n\nTesting { }\n";

        assert_eq!(get_line(source, 1).as_deref(), Some("Hello, world!"));
        assert_eq!(get_line(source, 2).as_deref(), Some("second"));
        assert_eq!(get_line(source, 3).as_deref(), Some(""));
        assert_eq!(get_line(source, 4).as_deref(), Some("Testing { }"));
        assert_eq!(get_line(source, 0), None);
        assert_eq!(get_line(source, 9), None);
    }

    #[test]
    fn test_scan_renders_tokens() {
        let mut sink = Vec::new();
        let diagnostics = scan("x := 'a' + 10;", &mut sink, ScannerConfig::default()).unwrap();

        assert!(diagnostics.is_empty());
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "1-1:TK_IDENT(x)\n1-3:SB_ASSIGN\n1-6:TK_CHAR('a')\n1-10:SB_PLUS\n1-12:TK_NUMBER(10)\n1-14:SB_SEMICOLON\n"
        );
    }

    #[test]
    fn test_scan_keeps_going_after_diagnostics() {
        let mut sink = Vec::new();
        let diagnostics = scan("a @ b (* open", &mut sink, ScannerConfig::default()).unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "1-1:TK_IDENT(a)\n1-3:TK_NONE\n1-5:TK_IDENT(b)\n"
        );
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.errors()[0].get_error_name(), "InvalidSymbol");
        assert_eq!(diagnostics.errors()[1].get_error_name(), "UnterminatedComment");
    }

    #[test]
    fn test_scan_reports_sink_failure() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let error = scan("x", &mut Broken, ScannerConfig::default()).unwrap_err();

        assert!(error.is_fatal());
        assert_eq!(error.get_error_name(), "OutputFailure");
    }

    #[test]
    fn test_render_diagnostic() {
        let source = b"program p;\nx := @;\n";
        let error = Error::new(
            ErrorImpl::InvalidSymbol { symbol: '@' },
            Position::new(2, 6),
        );

        assert_eq!(
            render_diagnostic(&error, source, "p.kpl"),
            "Error: InvalidSymbol\n-> p.kpl:2-6:invalid symbol: '@'\n  |\n2 | x := @;\n  | -----^\n"
        );
    }

    #[test]
    fn test_render_diagnostic_without_source_line() {
        let error = Error::new(
            ErrorImpl::StreamOpenFailure {
                path: "gone.kpl".to_string(),
                reason: "not found".to_string(),
            },
            Position::default(),
        );

        assert_eq!(
            render_diagnostic(&error, b"", "gone.kpl"),
            "Error: StreamOpenFailure (not found)\n-> gone.kpl:0-0:cannot read input file \"gone.kpl\"\n"
        );
    }
}
