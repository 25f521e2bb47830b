//! Error types and diagnostic state for the front end.
//!
//! This module defines the diagnostics the parser records while it
//! works through malformed input. It includes:
//!
//! - The fixed set of syntax error kinds with their expectation phrases
//! - Diagnostics carrying the offending token's exact source span
//! - The diagnostic bag with the panic flag that drives error recovery
//! - The aggregated parse error returned to callers

pub mod errors;

#[cfg(test)]
mod tests;
