use crate::Span;

use super::ast::Term;

/// Sequence Statement
/// Represents `first; rest`. The value of `first` is discarded.
#[derive(Debug, Clone)]
pub struct SeqStmt {
    pub first: Box<Term>,
    pub rest: Box<Term>,
    pub span: Span,
}

/// Const Statement
/// Represents `const identifier = value; rest`. The binding is visible in
/// `rest` only.
#[derive(Debug, Clone)]
pub struct ConstStmt {
    pub identifier: String,
    pub value: Box<Term>,
    pub rest: Box<Term>,
    pub span: Span,
}
