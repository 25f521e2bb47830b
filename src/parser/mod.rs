//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms the lexer's token
//! stream into top-level items. Expressions are parsed by precedence
//! climbing over a mutable operator table, and it handles:
//!
//! - Item parsing (function definitions, externs, top-level expressions)
//! - Prototype parsing, including `binary`/`unary` operator declarations
//! - Expression parsing with user-extensible operator precedence
//! - Error recovery: panic mode with resynchronization at `,`/`)`/eof
//!
//! Operator declarations mutate the precedence table at parse time, so
//! later expressions see the updated binding powers, including later
//! `parse_item` calls on the same session.

pub mod expr;
pub mod item;
pub mod lookups;
pub mod parser;
