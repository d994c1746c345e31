//! Integration tests for end-to-end type checking.
//!
//! These tests build the trees a parser would hand over for small programs
//! and verify the result of checking them through the public API.

use std::rc::Rc;

use typeck::{
    ast::{ast::Term, types::Type},
    errors::errors::ErrorTip,
    type_checker::{
        environment::Environment,
        type_checker::{type_check, typecheck},
    },
    Span,
};

fn number_param(name: &str) -> (String, Type) {
    (name.to_string(), Type::Number)
}

#[test]
fn test_check_addition() {
    // 1 + 2
    let ast = Term::add(Term::number(1.0), Term::number(2.0));
    let typed = type_check(&ast).expect("Type checking should succeed");

    assert_eq!(typed.get_type(), Type::Number);
}

#[test]
fn test_check_conditional() {
    // (true) ? true : false
    let ast = Term::if_else(Term::boolean(true), Term::boolean(true), Term::boolean(false));
    let typed = type_check(&ast).expect("Type checking should succeed");

    assert_eq!(typed.get_type(), Type::Boolean);
}

#[test]
fn test_check_conditional_with_number_condition() {
    // 1 ? true : 4
    let ast = Term::if_else(Term::number(1.0), Term::boolean(true), Term::number(4.0));
    let error = type_check(&ast).expect_err("Type checking should fail");

    assert_eq!(error.get_error_name(), "BooleanExpected");
}

#[test]
fn test_check_immediate_call() {
    // ((x: number) => x)(1)
    let ast = Term::call(
        Term::func(vec![number_param("x")], Term::symbol("x")),
        vec![Term::number(1.0)],
    );
    let typed = type_check(&ast).expect("Type checking should succeed");

    assert_eq!(typed.get_type(), Type::Number);
}

#[test]
fn test_check_program_with_bindings() {
    // const aaa = (x: number, y: number) => x + y;
    // const b = false;
    // aaa(1, aaa(1, 2))
    let aaa = Term::func(
        vec![number_param("x"), number_param("y")],
        Term::add(Term::symbol("x"), Term::symbol("y")),
    );
    let body = Term::call(
        Term::symbol("aaa"),
        vec![
            Term::number(1.0),
            Term::call(Term::symbol("aaa"), vec![Term::number(1.0), Term::number(2.0)]),
        ],
    );
    let ast = Term::constant("aaa", aaa, Term::constant("b", Term::boolean(false), body));

    assert_eq!(typecheck(&ast, &Environment::empty()).unwrap(), Type::Number);
}

#[test]
fn test_check_calling_a_number() {
    // 1()
    let file = Rc::new("main.ts".to_string());
    let ast = Term::call(
        Term::number(1.0).with_span(Span::new(0, 1, Rc::clone(&file))),
        vec![],
    )
    .with_span(Span::new(0, 3, file));
    let error = type_check(&ast).expect_err("Type checking should fail");

    assert_eq!(error.get_error_name(), "NotAFunction");
    assert_eq!(error.get_position().0, 0);
    assert_eq!(*error.get_position().1, "main.ts");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_check_higher_order_program() {
    // const twice = (f: (number) => number, x: number) => f(f(x));
    // twice((n: number) => n + 1, 2)
    let number_to_number = Type::function(vec![Type::Number], Type::Number);
    let twice = Term::func(
        vec![("f".to_string(), number_to_number), number_param("x")],
        Term::call(
            Term::symbol("f"),
            vec![Term::call(Term::symbol("f"), vec![Term::symbol("x")])],
        ),
    );
    let increment = Term::func(
        vec![number_param("n")],
        Term::add(Term::symbol("n"), Term::number(1.0)),
    );
    let ast = Term::constant(
        "twice",
        twice,
        Term::call(Term::symbol("twice"), vec![increment, Term::number(2.0)]),
    );

    assert_eq!(type_check(&ast).unwrap().get_type(), Type::Number);
}

#[test]
fn test_check_sequence_stops_at_first_error() {
    // x; 1 + true
    let ast = Term::seq(
        Term::symbol("x"),
        Term::add(Term::number(1.0), Term::boolean(true)),
    );
    let error = type_check(&ast).expect_err("Type checking should fail");

    assert_eq!(error.get_error_name(), "UnknownVariable");
    assert_eq!(error.to_string(), "unknown variable: \"x\" at <null>:0");
}
