//! Type checking module.
//!
//! This module derives a type for every node of a term. It transforms the
//! untyped AST into a typed AST while:
//!
//! - Verifying that `+` is only applied to numbers
//! - Requiring boolean conditions and agreeing branches
//! - Resolving variable references through lexical scopes
//! - Checking call arity and argument types against function types
//!
//! Scopes are persistent environments: each function or `const` binding
//! extends its parent for the duration of its own subtree only.

pub mod environment;
pub mod type_checker;
pub mod typed_ast;
