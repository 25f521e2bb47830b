/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree handed to consumers
///
/// Submodules:
/// - ast: Top-level items (functions, prototypes)
/// - expressions: Definitions for the expression variants
///
/// Both items and expressions are closed enums; consumers traverse the
/// tree with exhaustive pattern matches, so the compiler flags every
/// consumer when a variant is added.
pub mod ast;
pub mod expressions;
