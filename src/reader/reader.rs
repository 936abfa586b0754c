use std::{fs, path::Path};

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Byte cursor over a source text with line/column bookkeeping.
///
/// The reader always exposes exactly one current byte (or end-of-input) and
/// the position of that byte. Lines start at 1. Reading a newline moves to the
/// next line at column 0, so the first character of every line sits at
/// column 1.
#[derive(Debug, Clone)]
pub struct Reader {
    source: Vec<u8>,
    pos: usize,
    current: Option<u8>,
    line: u32,
    column: u32,
}

impl Reader {
    pub fn new(source: impl Into<Vec<u8>>) -> Reader {
        let mut reader = Reader {
            source: source.into(),
            pos: 0,
            current: None,
            line: 1,
            column: 0,
        };
        reader.read_char();
        reader
    }

    /// Reads the whole file up front. The handle is closed before this
    /// returns, whether or not the read succeeded.
    pub fn open(path: impl AsRef<Path>) -> Result<Reader, Error> {
        let path = path.as_ref();
        let source = fs::read(path).map_err(|err| {
            Error::new(
                ErrorImpl::StreamOpenFailure {
                    path: path.display().to_string(),
                    reason: err.to_string(),
                },
                Position::default(),
            )
        })?;

        debug!(path = %path.display(), bytes = source.len(), "opened input stream");
        Ok(Reader::new(source))
    }

    pub fn current(&self) -> Option<u8> {
        self.current
    }

    pub fn at_eof(&self) -> bool {
        self.current.is_none()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Whether the current byte is exactly `byte`. Used for raw one-byte
    /// lookahead without going through the classifier.
    pub fn peek_is(&self, byte: u8) -> bool {
        self.current == Some(byte)
    }

    /// Moves one byte forward. A no-op once end-of-input has been reached.
    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.read_char();
        }
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    fn read_char(&mut self) {
        self.current = self.source.get(self.pos).copied();
        self.pos += 1;
        self.column += 1;

        if self.current == Some(b'\n') {
            self.line += 1;
            self.column = 0;
        }
    }
}
