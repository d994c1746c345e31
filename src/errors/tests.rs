//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::types::Type;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip, Operand};
use crate::Position;
use std::rc::Rc;

fn position() -> Position {
    Position(0, Rc::new("test.ts".to_string()))
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.ts".to_string()));
    let error = Error::new(
        ErrorImpl::UnknownVariable {
            variable: "x".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position(), pos);
}

#[test]
fn test_error_names() {
    let cases = vec![
        (
            ErrorImpl::BooleanExpected {
                received: Type::Number,
            },
            "BooleanExpected",
        ),
        (
            ErrorImpl::NumberExpected {
                operand: Operand::Left,
                received: Type::Boolean,
            },
            "NumberExpected",
        ),
        (
            ErrorImpl::BranchTypeMismatch {
                then_type: Type::Boolean,
                else_type: Type::Number,
            },
            "BranchTypeMismatch",
        ),
        (
            ErrorImpl::UnknownVariable {
                variable: "foo".to_string(),
            },
            "UnknownVariable",
        ),
        (
            ErrorImpl::NotAFunction {
                received: Type::Number,
            },
            "NotAFunction",
        ),
        (
            ErrorImpl::ArityMismatch {
                expected: 2,
                received: 3,
            },
            "ArityMismatch",
        ),
        (
            ErrorImpl::ArgumentTypeMismatch {
                index: 1,
                expected: Type::Number,
                received: Type::Boolean,
            },
            "ArgumentTypeMismatch",
        ),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, position()).get_error_name(), name);
    }
}

#[test]
fn test_error_messages() {
    let error = ErrorImpl::NumberExpected {
        operand: Operand::Right,
        received: Type::Boolean,
    };
    assert_eq!(
        error.to_string(),
        "number expected on the right side, received boolean"
    );

    let error = ErrorImpl::ArgumentTypeMismatch {
        index: 0,
        expected: Type::function(vec![Type::Number], Type::Number),
        received: Type::Number,
    };
    assert_eq!(
        error.to_string(),
        "argument 0 has the wrong type: expected (number) => number, received number"
    );

    let error = ErrorImpl::UnknownVariable {
        variable: "y".to_string(),
    };
    assert_eq!(error.to_string(), "unknown variable: \"y\"");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::ArityMismatch {
            expected: 1,
            received: 0,
        },
        Position(7, Rc::new("main.ts".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "wrong number of arguments: expected 1, received 0 at main.ts:7"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::ArgumentTypeMismatch {
            index: 0,
            expected: Type::Number,
            received: Type::Boolean,
        },
        position(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::NotAFunction {
            received: Type::Number,
        },
        position(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Value of type `number` cannot be called"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
