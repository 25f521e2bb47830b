//! Lexical analysis module for the front end.
//!
//! This module contains the lexer that turns source text into a stream
//! of tokens, one token per call. It handles:
//!
//! - Lazy tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, number literals and operator symbols
//! - Line/column/offset tracking for error reporting
//! - Comments and whitespace handling
//!
//! Any punctuation character that is not `(`, `)` or `,` becomes a
//! one-character operator token, which is what allows user programs to
//! declare their own operators.

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
