use crate::Span;

use super::{ast::Term, types::Type};

// LITERALS

/// Boolean Expression
/// Payload of both the `true` and `false` literals.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub span: Span,
}

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// Symbol Expression
/// Represents a variable reference in the AST. This includes functions.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// COMPLEX

/// Add Expression
/// Represents `left + right`.
#[derive(Debug, Clone)]
pub struct AddExpr {
    pub left: Box<Term>,
    pub right: Box<Term>,
    pub span: Span,
}

/// If Expression
/// Represents the conditional `condition ? then_branch : else_branch`.
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub condition: Box<Term>,
    pub then_branch: Box<Term>,
    pub else_branch: Box<Term>,
    pub span: Span,
}

/// Function Expression
/// Represents an arrow function with annotated parameters, `(x: number) => body`.
#[derive(Debug, Clone)]
pub struct FuncExpr {
    pub parameters: Vec<(String, Type)>,
    pub body: Box<Term>,
    pub span: Span,
}

/// Call Expression
/// Represents the application of a callee to an argument list.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: Box<Term>,
    pub arguments: Vec<Term>,
    pub span: Span,
}
