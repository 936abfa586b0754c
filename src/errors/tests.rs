//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::errors::reporter::{Diagnostics, Reporter};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidSymbol { symbol: '@' },
        Position::new(10, 3),
    );

    assert_eq!(error.get_error_name(), "InvalidSymbol");
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::new(42, 7));

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_error_display_uses_line_column_prefix() {
    let error = Error::new(ErrorImpl::InvalidCharConstant, Position::new(3, 14));

    assert_eq!(error.to_string(), "3-14:invalid char constant");
}

#[test]
fn test_identifier_too_long_error() {
    let error = Error::new(
        ErrorImpl::IdentifierTooLong { max: 15 },
        Position::new(1, 1),
    );

    assert_eq!(error.get_error_name(), "IdentifierTooLong");
    assert_eq!(
        error.get_tip().to_string(),
        "Identifiers may be at most 15 characters long"
    );
}

#[test]
fn test_number_errors() {
    let too_long = Error::new(ErrorImpl::NumberTooLong { max: 9 }, Position::new(1, 1));
    let out_of_range = Error::new(
        ErrorImpl::NumberOutOfRange {
            lexeme: "99999999999".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(too_long.get_error_name(), "NumberTooLong");
    assert_eq!(too_long.kind(), &ErrorImpl::NumberTooLong { max: 9 });
    assert!(matches!(
        out_of_range.kind(),
        ErrorImpl::NumberOutOfRange { lexeme } if lexeme == "99999999999"
    ));
    assert_eq!(out_of_range.get_error_name(), "NumberOutOfRange");
    assert_eq!(
        out_of_range.to_string(),
        "1-1:number out of range: \"99999999999\""
    );
}

#[test]
fn test_only_io_failures_are_fatal() {
    let open_failure = Error::new(
        ErrorImpl::StreamOpenFailure {
            path: "missing.kpl".to_string(),
            reason: "No such file or directory".to_string(),
        },
        Position::default(),
    );
    let output_failure = Error::new(
        ErrorImpl::OutputFailure {
            reason: "disk full".to_string(),
        },
        Position::default(),
    );
    let recoverable = [
        ErrorImpl::UnterminatedComment,
        ErrorImpl::IdentifierTooLong { max: 15 },
        ErrorImpl::NumberTooLong { max: 9 },
        ErrorImpl::InvalidCharConstant,
        ErrorImpl::InvalidSymbol { symbol: '?' },
    ];

    assert!(open_failure.is_fatal());
    assert!(output_failure.is_fatal());
    assert_eq!(output_failure.get_error_name(), "OutputFailure");
    for kind in recoverable {
        assert!(!Error::new(kind, Position::new(1, 1)).is_fatal());
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::InvalidSymbol { symbol: '@' },
        Position::new(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::new(1, 1));

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostics_collects_in_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());

    diagnostics.report(Error::new(ErrorImpl::UnterminatedComment, Position::new(2, 1)));
    diagnostics.report(Error::new(ErrorImpl::InvalidCharConstant, Position::new(1, 5)));

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.errors()[0].get_error_name(), "UnterminatedComment");
    assert_eq!(diagnostics.errors()[1].get_error_name(), "InvalidCharConstant");
}

#[test]
fn test_reporter_through_mutable_reference() {
    fn report_one<R: Reporter>(mut reporter: R) {
        reporter.report(Error::new(
            ErrorImpl::InvalidSymbol { symbol: '#' },
            Position::new(1, 1),
        ));
    }

    let mut diagnostics = Diagnostics::new();
    report_one(&mut diagnostics);

    assert_eq!(diagnostics.into_errors().len(), 1);
}
