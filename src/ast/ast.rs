use std::fmt::Display;

use crate::Span;

use super::expressions::Expr;

/// The reserved name wrapping a bare top-level expression into a
/// zero-parameter function, so the tree shape is uniform downstream.
pub const ANONYMOUS_FUNCTION: &str = "__anon_expr";

/// A top-level item.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Function(Function),
    Prototype(Prototype),
}

impl Item {
    pub fn span(&self) -> &Span {
        match self {
            Item::Function(function) => &function.span,
            Item::Prototype(prototype) => &prototype.span,
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Function(function) => write!(f, "{}", function),
            Item::Prototype(prototype) => write!(f, "{}", prototype),
        }
    }
}

/// A function prototype: the name/parameter signature of a function or
/// user-defined operator, independent of its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
    /// Whether the prototype declares an operator.
    pub is_op: bool,
    /// The operator's precedence level, if it is an operator.
    pub precedence: i32,
    pub span: Span,
}

impl Prototype {
    pub fn is_unary_op(&self) -> bool {
        self.is_op && self.params.len() == 1
    }

    pub fn is_binary_op(&self) -> bool {
        self.is_op && self.params.len() == 2
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;

        if self.is_binary_op() {
            write!(f, " {} ", self.precedence)?;
        }

        write!(f, "({})", self.params.join(", "))
    }
}

/// A function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
    pub span: Span,
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "def {} {}", self.prototype, self.body)
    }
}
