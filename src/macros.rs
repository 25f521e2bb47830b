//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SIMPLE_HANDLER!` - Creates a lexer handler for single-kind tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler for patterns that always produce one kind.
///
/// Generates a handler function that consumes the matched text and
/// returns a token of the given kind spanning exactly that text.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// LexPattern {
///     regex: Regex::new("^,").unwrap(),
///     handler: MK_SIMPLE_HANDLER!(TokenKind::Comma),
/// }
/// ```
#[macro_export]
macro_rules! MK_SIMPLE_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            let span = lexer.consume(matched);
            MK_TOKEN!($kind, String::from(matched), span)
        }
    };
}
