//! Lexical analysis for KPL.
//!
//! This module contains the scanner that turns source bytes into tokens.
//! It handles:
//!
//! - Classification of every input byte into a coarse character class
//! - Recognition of keywords, identifiers, numbers and char constants
//! - Operators and punctuation with one byte of lookahead
//! - `(* ... *)` comments and whitespace
//! - Diagnostics for malformed input without aborting the pass

pub mod charcode;
pub mod lexer;
pub mod tokens;
