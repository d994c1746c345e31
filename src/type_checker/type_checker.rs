use std::rc::Rc;

use crate::{
    ast::{
        ast::Term,
        expressions::{CallExpr, FuncExpr},
        types::{type_eq, Type},
    },
    errors::errors::{Error, ErrorImpl, Operand},
};

use super::{
    environment::Environment,
    typed_ast::{
        TypedAddExpr, TypedBooleanExpr, TypedCallExpr, TypedConstStmt, TypedFuncExpr,
        TypedIfExpr, TypedNumberExpr, TypedSeqStmt, TypedSymbolExpr, TypedTerm,
    },
};

fn type_check_operand(
    term: &Term,
    operand: Operand,
    environment: &Rc<Environment>,
) -> Result<TypedTerm, Error> {
    let typed = type_check_term(term, environment)?;
    let ty = typed.get_type();
    if !ty.is_number() {
        return Err(Error::new(
            ErrorImpl::NumberExpected {
                operand,
                received: ty,
            },
            term.get_span().start.clone(),
        ));
    }
    Ok(typed)
}

fn type_check_func(func: &FuncExpr, environment: &Rc<Environment>) -> Result<TypedTerm, Error> {
    let scope = environment.extend(func.parameters.iter().cloned());
    let body = type_check_term(&func.body, &scope)?;

    let function_type = Type::function(
        func.parameters.iter().map(|(_, ty)| ty.clone()).collect(),
        body.get_type(),
    );

    Ok(TypedTerm::Func(TypedFuncExpr {
        parameters: func.parameters.clone(),
        body: Box::new(body),
        function_type,
        span: func.span.clone(),
    }))
}

fn type_check_call(call: &CallExpr, environment: &Rc<Environment>) -> Result<TypedTerm, Error> {
    let callee = type_check_term(&call.callee, environment)?;
    let callee_type = callee.get_type();
    let function = match callee_type.as_function() {
        Some(function) => function,
        None => {
            return Err(Error::new(
                ErrorImpl::NotAFunction {
                    received: callee_type.clone(),
                },
                call.callee.get_span().start.clone(),
            ))
        }
    };

    if call.arguments.len() != function.arity() {
        // Point at the first surplus argument, or at the end of the call when some are missing
        let position = match call.arguments.get(function.arity()) {
            Some(surplus) => surplus.get_span().start.clone(),
            None => call.span.end.clone(),
        };
        return Err(Error::new(
            ErrorImpl::ArityMismatch {
                expected: function.arity(),
                received: call.arguments.len(),
            },
            position,
        ));
    }

    let mut arguments = Vec::with_capacity(call.arguments.len());
    for (index, (argument, parameter)) in call.arguments.iter().zip(function.params.iter()).enumerate() {
        let typed = type_check_term(argument, environment)?;
        let argument_type = typed.get_type();
        if !type_eq(&argument_type, parameter) {
            return Err(Error::new(
                ErrorImpl::ArgumentTypeMismatch {
                    index,
                    expected: parameter.clone(),
                    received: argument_type,
                },
                argument.get_span().start.clone(),
            ));
        }
        arguments.push(typed);
    }

    Ok(TypedTerm::Call(TypedCallExpr {
        return_type: (*function.return_type).clone(),
        callee: Box::new(callee),
        arguments,
        span: call.span.clone(),
    }))
}

/// Checks `term` in `environment`, producing the typed tree.
///
/// Subterms are visited left to right, outer to inner, and the first rule
/// violation is returned.
pub fn type_check_term(term: &Term, environment: &Rc<Environment>) -> Result<TypedTerm, Error> {
    match term {
        Term::True(expr) => Ok(TypedTerm::True(TypedBooleanExpr {
            span: expr.span.clone(),
        })),
        Term::False(expr) => Ok(TypedTerm::False(TypedBooleanExpr {
            span: expr.span.clone(),
        })),
        Term::Number(expr) => Ok(TypedTerm::Number(TypedNumberExpr {
            value: expr.value,
            span: expr.span.clone(),
        })),
        Term::Add(add) => {
            let left = type_check_operand(&add.left, Operand::Left, environment)?;
            let right = type_check_operand(&add.right, Operand::Right, environment)?;

            Ok(TypedTerm::Add(TypedAddExpr {
                left: Box::new(left),
                right: Box::new(right),
                span: add.span.clone(),
            }))
        }
        Term::If(if_expr) => {
            let condition = type_check_term(&if_expr.condition, environment)?;
            let condition_type = condition.get_type();
            if !condition_type.is_boolean() {
                return Err(Error::new(
                    ErrorImpl::BooleanExpected {
                        received: condition_type,
                    },
                    if_expr.condition.get_span().start.clone(),
                ));
            }

            let then_branch = type_check_term(&if_expr.then_branch, environment)?;
            let else_branch = type_check_term(&if_expr.else_branch, environment)?;
            let then_type = then_branch.get_type();
            let else_type = else_branch.get_type();
            if !type_eq(&then_type, &else_type) {
                return Err(Error::new(
                    ErrorImpl::BranchTypeMismatch {
                        then_type,
                        else_type,
                    },
                    if_expr.else_branch.get_span().start.clone(),
                ));
            }

            Ok(TypedTerm::If(TypedIfExpr {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
                result_type: then_type,
                span: if_expr.span.clone(),
            }))
        }
        Term::Symbol(symbol) => {
            let var_type = environment.fetch_variable_type(&symbol.value, symbol.span.start.clone())?;

            Ok(TypedTerm::Symbol(TypedSymbolExpr {
                value: symbol.value.clone(),
                var_type,
                span: symbol.span.clone(),
            }))
        }
        Term::Func(func) => type_check_func(func, environment),
        Term::Call(call) => type_check_call(call, environment),
        Term::Seq(seq) => {
            let first = type_check_term(&seq.first, environment)?;
            let rest = type_check_term(&seq.rest, environment)?;

            Ok(TypedTerm::Seq(TypedSeqStmt {
                first: Box::new(first),
                rest: Box::new(rest),
                span: seq.span.clone(),
            }))
        }
        Term::Const(const_stmt) => {
            let value = type_check_term(&const_stmt.value, environment)?;
            let scope = environment.extend([(const_stmt.identifier.clone(), value.get_type())]);
            let rest = type_check_term(&const_stmt.rest, &scope)?;

            Ok(TypedTerm::Const(TypedConstStmt {
                identifier: const_stmt.identifier.clone(),
                value: Box::new(value),
                rest: Box::new(rest),
                span: const_stmt.span.clone(),
            }))
        }
    }
}

/// Returns the type of `term` in `environment`.
pub fn typecheck(term: &Term, environment: &Rc<Environment>) -> Result<Type, Error> {
    Ok(type_check_term(term, environment)?.get_type())
}

/// Checks a whole program in the empty environment.
pub fn type_check(ast: &Term) -> Result<TypedTerm, Error> {
    type_check_term(ast, &Environment::empty())
}
