//! Utility macros for the scanner.
//!
//! This module defines helper macros used throughout the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$position` - Where the token starts
/// * `$lexeme` - The token's source text (optional, empty when omitted)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, reader.position());
/// let token = MK_TOKEN!(TokenKind::Ident, position, String::from("x"));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $position:expr) => {
        $crate::MK_TOKEN!($kind, $position, String::new())
    };
    ($kind:expr, $position:expr, $lexeme:expr) => {
        Token {
            kind: $kind,
            position: $position,
            lexeme: $lexeme,
            number: None,
            character: None,
        }
    };
}
