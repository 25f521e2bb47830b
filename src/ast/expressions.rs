use std::fmt::Display;

use crate::Span;

/// A Kaleidoscope expression.
///
/// A closed set of variants; every consumer matches exhaustively. Each
/// variant carries the source span it was parsed from, and spans survive
/// unchanged into the tree so downstream passes can re-report against
/// the original source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Variable(VariableExpr),
    Call(CallExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    If(IfExpr),
    For(ForExpr),
    VarIn(VarInExpr),
}

impl Expr {
    /// The expression's source span.
    pub fn span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::Variable(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::If(expr) => &expr.span,
            Expr::For(expr) => &expr.span,
            Expr::VarIn(expr) => &expr.span,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(expr) => write!(f, "{}", expr.value),
            Expr::Variable(expr) => write!(f, "{}", expr.name),
            Expr::Call(expr) => {
                let args = expr
                    .args
                    .iter()
                    .map(|arg| arg.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "{}({})", expr.callee, args)
            }
            Expr::Unary(expr) => write!(f, "{}{}", expr.op, expr.operand),
            Expr::Binary(expr) => write!(f, "({} {} {})", expr.lhs, expr.op, expr.rhs),
            Expr::If(expr) => write!(
                f,
                "if {} then {} else {}",
                expr.condition, expr.then_branch, expr.else_branch
            ),
            Expr::For(expr) => write!(
                f,
                "for {} = {}, {}, {} in {}",
                expr.var_name, expr.start, expr.end, expr.step, expr.body
            ),
            Expr::VarIn(expr) => {
                write!(f, "var {} = {} in {}", expr.name, expr.value, expr.body)
            }
        }
    }
}

/// A number literal expression.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// A variable reference.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub span: Span,
}

/// A function call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// A prefix operator application.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: String,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// A binary operator application.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: String,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub span: Span,
}

/// A conditional expression.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Box<Expr>,
    pub span: Span,
}

/// A for loop expression.
///
/// The step is always present in the tree; the parser substitutes a
/// literal `1` when the source omits it.
#[derive(Debug, Clone, PartialEq)]
pub struct ForExpr {
    pub var_name: String,
    pub start: Box<Expr>,
    pub end: Box<Expr>,
    pub step: Box<Expr>,
    pub body: Box<Expr>,
    pub span: Span,
}

/// A variable definition expression: `var name = value in body`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarInExpr {
    pub name: String,
    pub value: Box<Expr>,
    pub body: Box<Expr>,
    pub span: Span,
}
