//! Type system definitions for the AST.
//!
//! This module defines the closed set of types in the language:
//!
//! - Primitive types (numbers, booleans)
//! - Function types with ordered parameter types and a return type
//!
//! Types appear in the AST as parameter annotations and are produced by the
//! type checker for every term.

use std::fmt::Display;

/// Represents a type in the language.
#[derive(Debug, Clone)]
pub enum Type {
    Boolean,
    Number,
    Function(FunctionType),
}

/// Represents a function type
///
/// Parameter names are not part of the type, only their order.
#[derive(Debug, Clone)]
pub struct FunctionType {
    pub params: Vec<Type>,
    pub return_type: Box<Type>,
}

impl FunctionType {
    pub fn new(params: Vec<Type>, return_type: Type) -> Self {
        FunctionType {
            params,
            return_type: Box::new(return_type),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Type {
    pub fn function(params: Vec<Type>, return_type: Type) -> Self {
        Type::Function(FunctionType::new(params, return_type))
    }

    /// Returns the name of the type's tag.
    pub fn get_type_name(&self) -> &str {
        match self {
            Type::Boolean => "Boolean",
            Type::Number => "Number",
            Type::Function(_) => "Function",
        }
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Type::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Type::Boolean)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Type::Number)
    }
}

/// Structural equality of two types.
///
/// Function types are equal when they have the same arity, pairwise equal
/// parameter types (by position) and equal return types.
pub fn type_eq(a: &Type, b: &Type) -> bool {
    match (a, b) {
        (Type::Boolean, Type::Boolean) => true,
        (Type::Number, Type::Number) => true,
        (Type::Function(a), Type::Function(b)) => {
            a.params.len() == b.params.len()
                && a.params.iter().zip(b.params.iter()).all(|(x, y)| type_eq(x, y))
                && type_eq(&a.return_type, &b.return_type)
        }
        _ => false,
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        type_eq(self, other)
    }
}

impl Eq for Type {}

impl Display for FunctionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ") => {}", self.return_type)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Boolean => write!(f, "boolean"),
            Type::Number => write!(f, "number"),
            Type::Function(function) => write!(f, "{}", function),
        }
    }
}
