use tracing::{debug, trace};

use crate::{
    errors::{
        errors::{Error, ErrorImpl},
        reporter::{Diagnostics, Reporter},
    },
    reader::reader::Reader,
    Position, MK_TOKEN,
};

use super::{
    charcode::{char_class, CharClass},
    tokens::{check_keyword, Token, TokenKind},
};

pub const MAX_IDENT_LEN: usize = 15;
/// Nine digits always fit in an `i32`.
pub const MAX_NUMBER_LEN: usize = 9;

/// Lexeme bounds for a scanning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    pub max_ident_len: usize,
    pub max_number_len: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            max_ident_len: MAX_IDENT_LEN,
            max_number_len: MAX_NUMBER_LEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentState {
    Outside,
    SeenStar,
    Closed,
}

/// Single-pass scanner. Owns its reader and reporter, so one instance is one
/// pass over one input.
pub struct Scanner<R: Reporter> {
    reader: Reader,
    reporter: R,
    config: ScannerConfig,
    finished: bool,
}

impl<R: Reporter> Scanner<R> {
    pub fn new(reader: Reader, reporter: R) -> Scanner<R> {
        Scanner::with_config(reader, reporter, ScannerConfig::default())
    }

    pub fn with_config(reader: Reader, reporter: R, config: ScannerConfig) -> Scanner<R> {
        Scanner {
            reader,
            reporter,
            config,
            finished: false,
        }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Returns the next token. Once the input is exhausted every call returns
    /// an EOF token at the same position.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        trace!(token = %token, "scanned token");
        token
    }

    fn scan_token(&mut self) -> Token {
        loop {
            let Some(byte) = self.reader.current() else {
                return MK_TOKEN!(TokenKind::EOF, self.reader.position());
            };
            let position = self.reader.position();

            match char_class(byte) {
                CharClass::Space => self.skip_blank(),
                CharClass::Letter => return self.read_ident_keyword(),
                CharClass::Digit => return self.read_number(),
                CharClass::SingleQuote => return self.read_const_char(),

                CharClass::Plus => return self.single(TokenKind::Plus),
                CharClass::Minus => return self.single(TokenKind::Minus),
                CharClass::Times => return self.single(TokenKind::Times),
                CharClass::Slash => return self.single(TokenKind::Slash),
                CharClass::Comma => return self.single(TokenKind::Comma),
                CharClass::Semicolon => return self.single(TokenKind::Semicolon),
                CharClass::Equal => return self.single(TokenKind::Equal),
                CharClass::RParen => return self.single(TokenKind::RParen),

                CharClass::LessThan => {
                    return self.with_trailing_equal(TokenKind::Lt, TokenKind::Le)
                }
                CharClass::GreaterThan => {
                    return self.with_trailing_equal(TokenKind::Gt, TokenKind::Ge)
                }
                CharClass::Exclaim => return self.read_not_equal(),
                CharClass::Period => {
                    return self.with_trailing_byte(TokenKind::Period, b')', TokenKind::RSel)
                }
                CharClass::Colon => {
                    return self.with_trailing_byte(TokenKind::Colon, b'=', TokenKind::Assign)
                }

                CharClass::LParen => {
                    self.reader.advance();

                    if self.reader.peek_is(b'.') {
                        self.reader.advance();
                        return MK_TOKEN!(TokenKind::LSel, position);
                    }
                    if !self.reader.peek_is(b'*') {
                        return MK_TOKEN!(TokenKind::LParen, position);
                    }

                    self.skip_comment(position);
                }

                CharClass::Underscore
                | CharClass::LeftSquare
                | CharClass::RightSquare
                | CharClass::Unknown => {
                    self.error(
                        ErrorImpl::InvalidSymbol {
                            symbol: byte as char,
                        },
                        position,
                    );
                    self.reader.advance();
                    return MK_TOKEN!(TokenKind::None, position);
                }
            }
        }
    }

    fn error(&mut self, error_impl: ErrorImpl, position: Position) {
        let error = Error::new(error_impl, position);
        debug!(error = %error, "malformed input");
        self.reporter.report(error);
    }

    fn current_class(&self) -> Option<CharClass> {
        self.reader.current().map(char_class)
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let token = MK_TOKEN!(kind, self.reader.position());
        self.reader.advance();
        token
    }

    /// `<` / `>`, upgraded to `<=` / `>=` when an `=` follows.
    fn with_trailing_equal(&mut self, kind: TokenKind, upgraded: TokenKind) -> Token {
        let mut token = self.single(kind);

        if self.current_class() == Some(CharClass::Equal) {
            token.kind = upgraded;
            self.reader.advance();
        }

        token
    }

    fn with_trailing_byte(&mut self, kind: TokenKind, next: u8, upgraded: TokenKind) -> Token {
        let mut token = self.single(kind);

        if self.reader.peek_is(next) {
            token.kind = upgraded;
            self.reader.advance();
        }

        token
    }

    fn read_not_equal(&mut self) -> Token {
        let position = self.reader.position();
        self.reader.advance();

        if self.reader.peek_is(b'=') {
            self.reader.advance();
            return MK_TOKEN!(TokenKind::NotEqual, position);
        }

        self.error(ErrorImpl::InvalidSymbol { symbol: '!' }, position);
        MK_TOKEN!(TokenKind::None, position)
    }

    fn skip_blank(&mut self) {
        while self.current_class() == Some(CharClass::Space) {
            self.reader.advance();
        }
    }

    /// Entered with the reader on the `*` of `(*`.
    fn skip_comment(&mut self, opener: Position) {
        let mut state = CommentState::Outside;
        self.reader.advance();

        while state != CommentState::Closed {
            let Some(byte) = self.reader.current() else {
                break;
            };

            state = match (char_class(byte), state) {
                (CharClass::Times, _) => CommentState::SeenStar,
                (CharClass::RParen, CommentState::SeenStar) => CommentState::Closed,
                (CharClass::RParen, _) => CommentState::Outside,
                (_, state) => state,
            };
            self.reader.advance();
        }

        if state != CommentState::Closed {
            self.error(ErrorImpl::UnterminatedComment, opener);
        }
    }

    /// Appends the current byte while it satisfies `accept`, never growing the
    /// lexeme past `max`. Returns whether the run was longer than `max`.
    fn read_run(&mut self, lexeme: &mut String, max: usize, accept: fn(CharClass) -> bool) -> bool {
        let mut overflow = false;

        while let Some(byte) = self.reader.current() {
            if !accept(char_class(byte)) {
                break;
            }

            if lexeme.len() < max {
                lexeme.push(byte as char);
            } else {
                overflow = true;
            }
            self.reader.advance();
        }

        overflow
    }

    fn read_ident_keyword(&mut self) -> Token {
        let mut token = MK_TOKEN!(TokenKind::Ident, self.reader.position());
        let max = self.config.max_ident_len;

        let overflow = self.read_run(&mut token.lexeme, max, |class| {
            matches!(class, CharClass::Letter | CharClass::Digit)
        });

        if overflow {
            self.error(ErrorImpl::IdentifierTooLong { max }, token.position);
        } else if let Some(kind) = check_keyword(&token.lexeme) {
            token.kind = kind;
        }

        token
    }

    fn read_number(&mut self) -> Token {
        let mut token = MK_TOKEN!(TokenKind::Number, self.reader.position());
        let max = self.config.max_number_len;

        let overflow = self.read_run(&mut token.lexeme, max, |class| class == CharClass::Digit);
        if overflow {
            // The truncated digits are not the number that was written.
            self.error(ErrorImpl::NumberTooLong { max }, token.position);
            token.number = Some(i32::MAX);
            return token;
        }

        let value = token.lexeme.bytes().try_fold(0i32, |acc, digit| {
            acc.checked_mul(10)?.checked_add(i32::from(digit - b'0'))
        });

        token.number = match value {
            Some(value) => Some(value),
            None => {
                self.error(
                    ErrorImpl::NumberOutOfRange {
                        lexeme: token.lexeme.clone(),
                    },
                    token.position,
                );
                Some(i32::MAX)
            }
        };

        token
    }

    fn read_const_char(&mut self) -> Token {
        let position = self.reader.position();
        self.reader.advance();

        let Some(value) = self.reader.current() else {
            self.error(ErrorImpl::InvalidCharConstant, position);
            return MK_TOKEN!(TokenKind::None, position);
        };
        self.reader.advance();

        if !self.reader.peek_is(b'\'') {
            self.error(ErrorImpl::InvalidCharConstant, position);
            return MK_TOKEN!(TokenKind::None, position);
        }
        self.reader.advance();

        let character = value as char;
        let mut token = MK_TOKEN!(TokenKind::CharLiteral, position, character.to_string());
        token.character = Some(character);
        token
    }
}

/// Yields every token up to and including EOF.
impl<R: Reporter> Iterator for Scanner<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }

        Some(token)
    }
}

pub fn tokenize(source: impl AsRef<[u8]>) -> (Vec<Token>, Vec<Error>) {
    tokenize_with_config(source, ScannerConfig::default())
}

pub fn tokenize_with_config(
    source: impl AsRef<[u8]>,
    config: ScannerConfig,
) -> (Vec<Token>, Vec<Error>) {
    let reader = Reader::new(source.as_ref().to_vec());
    let mut scanner = Scanner::with_config(reader, Diagnostics::new(), config);

    let tokens: Vec<Token> = scanner.by_ref().collect();
    (tokens, scanner.into_reporter().into_errors())
}
