//! Error types and diagnostic reporting for the scanner.
//!
//! This module defines the error types produced while scanning. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for malformed tokens and unreadable input
//! - The `Reporter` trait the scanner sends diagnostics through
//! - Helpful error messages and suggestions

pub mod errors;
pub mod reporter;

#[cfg(test)]
mod tests;
