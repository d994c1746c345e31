use crate::Span;

use super::{
    expressions::{AddExpr, BooleanExpr, CallExpr, FuncExpr, IfExpr, NumberExpr, SymbolExpr},
    statements::{ConstStmt, SeqStmt},
    types::Type,
};

/// Term
///
/// A node of the program's syntax tree as handed over by the parser.
/// Every variant wraps a node struct carrying its own span.
#[derive(Debug, Clone)]
pub enum Term {
    True(BooleanExpr),
    False(BooleanExpr),
    Number(NumberExpr),
    Add(AddExpr),
    If(IfExpr),
    Symbol(SymbolExpr),
    Func(FuncExpr),
    Call(CallExpr),
    Seq(SeqStmt),
    Const(ConstStmt),
}

// Constructors below produce nodes with a null span; parsers attach the real
// one through `with_span`.
impl Term {
    pub fn boolean(value: bool) -> Self {
        let expr = BooleanExpr { span: Span::null() };
        if value {
            Term::True(expr)
        } else {
            Term::False(expr)
        }
    }

    pub fn number(value: f64) -> Self {
        Term::Number(NumberExpr {
            value,
            span: Span::null(),
        })
    }

    pub fn add(left: Term, right: Term) -> Self {
        Term::Add(AddExpr {
            left: Box::new(left),
            right: Box::new(right),
            span: Span::null(),
        })
    }

    pub fn if_else(condition: Term, then_branch: Term, else_branch: Term) -> Self {
        Term::If(IfExpr {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
            span: Span::null(),
        })
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Term::Symbol(SymbolExpr {
            value: name.into(),
            span: Span::null(),
        })
    }

    pub fn func(parameters: Vec<(String, Type)>, body: Term) -> Self {
        Term::Func(FuncExpr {
            parameters,
            body: Box::new(body),
            span: Span::null(),
        })
    }

    pub fn call(callee: Term, arguments: Vec<Term>) -> Self {
        Term::Call(CallExpr {
            callee: Box::new(callee),
            arguments,
            span: Span::null(),
        })
    }

    pub fn seq(first: Term, rest: Term) -> Self {
        Term::Seq(SeqStmt {
            first: Box::new(first),
            rest: Box::new(rest),
            span: Span::null(),
        })
    }

    pub fn constant(identifier: impl Into<String>, value: Term, rest: Term) -> Self {
        Term::Const(ConstStmt {
            identifier: identifier.into(),
            value: Box::new(value),
            rest: Box::new(rest),
            span: Span::null(),
        })
    }

    /// Replaces the span of this node, leaving its children untouched.
    pub fn with_span(mut self, span: Span) -> Self {
        *self.get_span_mut() = span;
        self
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Term::True(expr) | Term::False(expr) => &expr.span,
            Term::Number(expr) => &expr.span,
            Term::Add(expr) => &expr.span,
            Term::If(expr) => &expr.span,
            Term::Symbol(expr) => &expr.span,
            Term::Func(expr) => &expr.span,
            Term::Call(expr) => &expr.span,
            Term::Seq(stmt) => &stmt.span,
            Term::Const(stmt) => &stmt.span,
        }
    }

    fn get_span_mut(&mut self) -> &mut Span {
        match self {
            Term::True(expr) | Term::False(expr) => &mut expr.span,
            Term::Number(expr) => &mut expr.span,
            Term::Add(expr) => &mut expr.span,
            Term::If(expr) => &mut expr.span,
            Term::Symbol(expr) => &mut expr.span,
            Term::Func(expr) => &mut expr.span,
            Term::Call(expr) => &mut expr.span,
            Term::Seq(stmt) => &mut stmt.span,
            Term::Const(stmt) => &mut stmt.span,
        }
    }
}
