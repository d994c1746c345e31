//! Typed Abstract Syntax Tree definitions.
//!
//! This module contains the typed variants of AST nodes produced by
//! the type checker. Each typed node records the type derived for it,
//! so callers can inspect the type of every subexpression, not only
//! the type of the whole program.
//!
//! The typed AST mirrors the structure of the untyped AST one variant
//! per variant.

use crate::{ast::types::Type, Span};

#[derive(Debug, Clone)]
pub enum TypedTerm {
    True(TypedBooleanExpr),
    False(TypedBooleanExpr),
    Number(TypedNumberExpr),
    Add(TypedAddExpr),
    If(TypedIfExpr),
    Symbol(TypedSymbolExpr),
    Func(TypedFuncExpr),
    Call(TypedCallExpr),
    Seq(TypedSeqStmt),
    Const(TypedConstStmt),
}

impl TypedTerm {
    /// Returns the type derived for this node.
    pub fn get_type(&self) -> Type {
        match self {
            TypedTerm::True(_) | TypedTerm::False(_) => Type::Boolean,
            TypedTerm::Number(_) | TypedTerm::Add(_) => Type::Number,
            TypedTerm::If(expr) => expr.result_type.clone(),
            TypedTerm::Symbol(expr) => expr.var_type.clone(),
            TypedTerm::Func(expr) => expr.function_type.clone(),
            TypedTerm::Call(expr) => expr.return_type.clone(),
            TypedTerm::Seq(stmt) => stmt.rest.get_type(),
            TypedTerm::Const(stmt) => stmt.rest.get_type(),
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            TypedTerm::True(expr) | TypedTerm::False(expr) => &expr.span,
            TypedTerm::Number(expr) => &expr.span,
            TypedTerm::Add(expr) => &expr.span,
            TypedTerm::If(expr) => &expr.span,
            TypedTerm::Symbol(expr) => &expr.span,
            TypedTerm::Func(expr) => &expr.span,
            TypedTerm::Call(expr) => &expr.span,
            TypedTerm::Seq(stmt) => &stmt.span,
            TypedTerm::Const(stmt) => &stmt.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypedBooleanExpr {
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedNumberExpr {
    pub value: f64,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedAddExpr {
    pub left: Box<TypedTerm>,
    pub right: Box<TypedTerm>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedIfExpr {
    pub condition: Box<TypedTerm>,
    pub then_branch: Box<TypedTerm>,
    pub else_branch: Box<TypedTerm>,
    /// Shared by both branches.
    pub result_type: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedSymbolExpr {
    pub value: String,
    pub var_type: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedFuncExpr {
    pub parameters: Vec<(String, Type)>,
    pub body: Box<TypedTerm>,
    pub function_type: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedCallExpr {
    pub callee: Box<TypedTerm>,
    pub arguments: Vec<TypedTerm>,
    pub return_type: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedSeqStmt {
    pub first: Box<TypedTerm>,
    pub rest: Box<TypedTerm>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedConstStmt {
    pub identifier: String,
    pub value: Box<TypedTerm>,
    pub rest: Box<TypedTerm>,
    pub span: Span,
}

impl TypedConstStmt {
    /// The type bound to `identifier` while checking `rest`.
    pub fn get_var_type(&self) -> Type {
        self.value.get_type()
    }
}
