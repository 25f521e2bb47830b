use std::fmt::Display;

use log::trace;
use thiserror::Error;

use crate::Span;

/// The kinds of syntax errors the parser can report.
///
/// Each kind renders as a fixed expectation phrase; the diagnostic's
/// span points at the offending token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("expect a function or operator declaration")]
    ExpectedDeclaration,
    #[error("expect a binary operator")]
    ExpectedBinaryOperator,
    #[error("expect a unary operator")]
    ExpectedUnaryOperator,
    #[error("expect a parameter name")]
    ExpectedParameterName,
    #[error("expect a variable name")]
    ExpectedVariableName,
    #[error("expect an expression")]
    ExpectedExpression,
    #[error("expect a '('")]
    ExpectedLeftParen,
    #[error("expect a ')'")]
    ExpectedRightParen,
    #[error("expect a ','")]
    ExpectedComma,
    #[error("expect a '='")]
    ExpectedEquals,
    #[error("expect the 'then' keyword")]
    ExpectedThen,
    #[error("expect the 'else' keyword")]
    ExpectedElse,
    #[error("expect the 'in' keyword")]
    ExpectedIn,
    #[error("invalid number of operands for operator")]
    InvalidOperandCount,
    #[error("invalid number literal")]
    InvalidNumber,
    #[error("unexpected token")]
    UnexpectedToken,
}

/// A diagnostic recorded while parsing one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}.", self.span, self.kind)
    }
}

/// The ordered diagnostics of one `parse_item` call plus the panic flag
/// that suppresses cascading errors until the parser resynchronizes.
///
/// `emit` and `recover` are the only mutators of the panic flag.
#[derive(Debug, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
    panicking: bool,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        DiagnosticBag::default()
    }

    /// Records a diagnostic and enters panic mode. Dropped silently when
    /// already panicking, so one failure point reports once.
    pub fn emit(&mut self, kind: SyntaxErrorKind, span: Span) {
        if self.panicking {
            trace!("suppressed diagnostic at {}: {}", span, kind);
            return;
        }

        trace!("diagnostic at {}: {}", span, kind);
        self.diagnostics.push(Diagnostic { kind, span });
        self.panicking = true;
    }

    pub fn is_panicking(&self) -> bool {
        self.panicking
    }

    /// Leaves panic mode once the parser has reached a safe boundary.
    pub fn recover(&mut self) {
        self.panicking = false;
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Resets the bag for a fresh input.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.panicking = false;
    }

    /// Drains the bag into the aggregated error for one call.
    pub fn into_error(&mut self, origin: &str) -> ParseError {
        ParseError {
            origin: String::from(origin),
            diagnostics: std::mem::take(&mut self.diagnostics),
        }
    }
}

/// The aggregated outcome of a failed `parse_item` call: every
/// diagnostic collected for the input, reported together.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Syntax errors in {origin}:{}", .diagnostics.iter().map(|d| format!("\n\t- {d}")).collect::<String>())]
pub struct ParseError {
    pub origin: String,
    pub diagnostics: Vec<Diagnostic>,
}
