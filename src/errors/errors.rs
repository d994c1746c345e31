use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::Type, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::BooleanExpected { .. } => "BooleanExpected",
            ErrorImpl::NumberExpected { .. } => "NumberExpected",
            ErrorImpl::BranchTypeMismatch { .. } => "BranchTypeMismatch",
            ErrorImpl::UnknownVariable { .. } => "UnknownVariable",
            ErrorImpl::NotAFunction { .. } => "NotAFunction",
            ErrorImpl::ArityMismatch { .. } => "ArityMismatch",
            ErrorImpl::ArgumentTypeMismatch { .. } => "ArgumentTypeMismatch",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::BooleanExpected { received } => ErrorTip::Suggestion(format!(
                "The condition has type `{}`, only `boolean` can be used here",
                received
            )),
            ErrorImpl::NumberExpected { operand, received } => ErrorTip::Suggestion(format!(
                "The {} operand of `+` has type `{}`, expected `number`",
                operand, received
            )),
            ErrorImpl::BranchTypeMismatch {
                then_type,
                else_type,
            } => ErrorTip::Suggestion(format!(
                "Both branches must have the same type, found `{}` and `{}`",
                then_type, else_type
            )),
            ErrorImpl::UnknownVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::NotAFunction { received } => {
                ErrorTip::Suggestion(format!("Value of type `{}` cannot be called", received))
            }
            ErrorImpl::ArityMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::ArgumentTypeMismatch { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Side of a `+` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Left,
    Right,
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Left => write!(f, "left"),
            Operand::Right => write!(f, "right"),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("boolean expected, received {received}")]
    BooleanExpected { received: Type },
    #[error("number expected on the {operand} side, received {received}")]
    NumberExpected { operand: Operand, received: Type },
    #[error("then and else have different types: {then_type} and {else_type}")]
    BranchTypeMismatch { then_type: Type, else_type: Type },
    #[error("unknown variable: {variable:?}")]
    UnknownVariable { variable: String },
    #[error("function type expected, received {received}")]
    NotAFunction { received: Type },
    #[error("wrong number of arguments: expected {expected:?}, received {received:?}")]
    ArityMismatch { expected: usize, received: usize },
    #[error("argument {index} has the wrong type: expected {expected}, received {received}")]
    ArgumentTypeMismatch {
        index: usize,
        expected: Type,
        received: Type,
    },
}
