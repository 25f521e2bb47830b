//! Unit tests for diagnostics and error reporting.

use pretty_assertions::assert_eq;

use crate::{Location, Span};

use super::errors::{Diagnostic, DiagnosticBag, SyntaxErrorKind};

fn span(start_column: u32, end_column: u32) -> Span {
    Span {
        start: Location {
            line: 1,
            column: start_column,
            offset: start_column as usize - 1,
        },
        end: Location {
            line: 1,
            column: end_column,
            offset: end_column as usize - 1,
        },
    }
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic {
        kind: SyntaxErrorKind::ExpectedRightParen,
        span: span(9, 10),
    };

    assert_eq!(diagnostic.to_string(), "1:9..1:10: expect a ')'.");
}

#[test]
fn test_emit_enters_panic_mode() {
    let mut bag = DiagnosticBag::new();
    assert!(!bag.is_panicking());

    bag.emit(SyntaxErrorKind::ExpectedExpression, span(1, 2));
    assert!(bag.is_panicking());
    assert_eq!(bag.diagnostics().len(), 1);
}

#[test]
fn test_emit_suppressed_while_panicking() {
    let mut bag = DiagnosticBag::new();

    bag.emit(SyntaxErrorKind::ExpectedExpression, span(1, 2));
    bag.emit(SyntaxErrorKind::ExpectedRightParen, span(3, 4));

    // Only the first failure point is recorded.
    assert_eq!(bag.diagnostics().len(), 1);
    assert_eq!(bag.diagnostics()[0].kind, SyntaxErrorKind::ExpectedExpression);
}

#[test]
fn test_emit_resumes_after_recover() {
    let mut bag = DiagnosticBag::new();

    bag.emit(SyntaxErrorKind::ExpectedExpression, span(1, 2));
    bag.recover();
    assert!(!bag.is_panicking());

    bag.emit(SyntaxErrorKind::ExpectedRightParen, span(3, 4));
    assert_eq!(bag.diagnostics().len(), 2);
}

#[test]
fn test_clear_resets_bag() {
    let mut bag = DiagnosticBag::new();
    bag.emit(SyntaxErrorKind::ExpectedExpression, span(1, 2));

    bag.clear();
    assert!(bag.is_empty());
    assert!(!bag.is_panicking());
}

#[test]
fn test_into_error_drains_bag() {
    let mut bag = DiagnosticBag::new();
    bag.emit(SyntaxErrorKind::ExpectedThen, span(5, 9));

    let error = bag.into_error("repl");
    assert_eq!(error.origin, "repl");
    assert_eq!(error.diagnostics.len(), 1);
    assert!(bag.is_empty());
}

#[test]
fn test_parse_error_display_lists_diagnostics() {
    let mut bag = DiagnosticBag::new();
    bag.emit(SyntaxErrorKind::ExpectedParameterName, span(10, 12));
    bag.recover();
    bag.emit(SyntaxErrorKind::ExpectedElse, span(28, 28));

    let error = bag.into_error("fib.kal");
    assert_eq!(
        error.to_string(),
        "Syntax errors in fib.kal:\
         \n\t- 1:10..1:12: expect a parameter name.\
         \n\t- 1:28..1:28: expect the 'else' keyword."
    );
}
