//! Integration tests for end-to-end type checking.
//!
//! These tests build complete PCF programs through the public API and verify
//! the type or failure the checker reports for each.

use pcf_typeck::{
    ast::{terms::Term, types::Type},
    errors::errors::ErrorImpl,
    type_checker::{
        config::{CheckerConfig, ScopePolicy},
        environment::Environment,
        type_checker::{type_check, type_of, TypeChecker},
    },
};

fn int_to_int() -> Type {
    Type::function(Type::Integer, Type::Integer)
}

fn recursive_sum() -> Term {
    Term::fix(
        "sum",
        Type::function(Type::Integer, int_to_int()),
        Term::function(
            "x",
            Type::Integer,
            Term::function(
                "y",
                Type::Integer,
                Term::cond(
                    Term::app(Term::IsZero, Term::ident("x")),
                    Term::ident("y"),
                    Term::app(
                        Term::app(
                            Term::ident("sum"),
                            Term::app(Term::Predecessor, Term::ident("x")),
                        ),
                        Term::app(Term::Successor, Term::ident("y")),
                    ),
                ),
            ),
        ),
    )
}

#[test]
fn test_recursive_sum() {
    let result = type_check(&recursive_sum(), &Environment::empty());
    assert_eq!(result, Ok(Type::function(Type::Integer, int_to_int())));
}

#[test]
fn test_recursive_sum_applied() {
    let term = Term::app(Term::app(recursive_sum(), Term::num(3)), Term::num(4));
    assert_eq!(type_check(&term, &Environment::empty()), Ok(Type::Integer));
}

#[test]
fn test_recursive_sum_with_wrong_declaration() {
    let term = match recursive_sum() {
        Term::RecursiveDef { name, body, .. } => Term::RecursiveDef {
            name,
            declared_type: int_to_int(),
            body,
        },
        _ => unreachable!(),
    };

    let error = type_check(&term, &Environment::empty()).unwrap_err();
    assert_eq!(error.get_error_name(), "NotAFunction");
}

#[test]
fn test_let_bound_successor() {
    let term = Term::let_in(
        "f",
        int_to_int(),
        Term::function("x", Type::Integer, Term::app(Term::Successor, Term::ident("x"))),
        Term::app(Term::ident("f"), Term::num(0)),
    );
    assert_eq!(type_check(&term, &Environment::empty()), Ok(Type::Integer));
}

#[test]
fn test_pair_projections() {
    let pair = Term::pair(Term::num(1), Term::boolean(true));
    assert_eq!(
        type_check(&Term::first(pair.clone()), &Environment::empty()),
        Ok(Type::Integer)
    );
    assert_eq!(
        type_check(&Term::second(pair), &Environment::empty()),
        Ok(Type::Boolean)
    );
}

#[test]
fn test_nested_pairs() {
    let term = Term::second(Term::first(Term::pair(
        Term::pair(Term::num(1), Term::IsZero),
        Term::boolean(false),
    )));
    assert_eq!(
        type_check(&term, &Environment::empty()),
        Ok(Type::function(Type::Integer, Type::Boolean))
    );
}

#[test]
fn test_failures_through_public_api() {
    let env = Environment::empty();

    let error = type_check(&Term::first(Term::num(5)), &env).unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::NotAPair {
            received: "Integer".to_string()
        }
    );

    let error = type_check(&Term::app(Term::Successor, Term::boolean(true)), &env).unwrap_err();
    assert_eq!(error.get_error_name(), "ArgumentTypeMismatch");

    assert_eq!(type_of(&Term::ident("nope"), &env), Type::Error);
}

#[test]
fn test_error_from_deep_subterm_propagates() {
    let term = Term::function(
        "x",
        Type::Integer,
        Term::cond(
            Term::app(Term::IsZero, Term::ident("x")),
            Term::app(Term::Successor, Term::ident("x")),
            Term::app(Term::Predecessor, Term::ident("y")),
        ),
    );

    let error = type_check(&term, &Environment::empty()).unwrap_err();
    assert_eq!(error.get_error_name(), "UnboundIdentifier");
    assert_eq!(error.get_term(), "y");
}

#[test]
fn test_supplied_environment() {
    let env: Environment = vec![
        ("double".to_string(), int_to_int()),
        ("flag".to_string(), Type::Boolean),
    ]
    .into_iter()
    .collect();

    let term = Term::cond(
        Term::ident("flag"),
        Term::app(Term::ident("double"), Term::num(2)),
        Term::num(0),
    );
    assert_eq!(type_check(&term, &env), Ok(Type::Integer));
    assert_eq!(env.len(), 2);
}

#[test]
fn test_let_scoping_under_both_policies() {
    let env = Environment::empty().extend("base", Type::Integer);
    let term = Term::let_in(
        "n",
        Type::Integer,
        Term::app(Term::Successor, Term::ident("base")),
        Term::pair(Term::ident("n"), Term::boolean(true)),
    );

    let isolated = TypeChecker::default();
    let error = isolated.check(&term, &env).unwrap_err();
    assert_eq!(error.get_error_name(), "UnboundIdentifier");

    let ambient = TypeChecker::new(CheckerConfig::new().with_scope_policy(ScopePolicy::Ambient));
    assert_eq!(
        ambient.check(&term, &env),
        Ok(Type::pair(Type::Integer, Type::Boolean))
    );
}

#[test]
fn test_deep_term_with_depth_limit() {
    let mut term = Term::num(0);
    for _ in 0..200 {
        term = Term::app(Term::Successor, term);
    }

    assert_eq!(type_check(&term, &Environment::empty()), Ok(Type::Integer));

    let checker = TypeChecker::new(CheckerConfig::new().with_max_depth(100));
    let error = checker.check(&term, &Environment::empty()).unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::DepthLimitExceeded { limit: 100 });
}
