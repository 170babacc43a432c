//! Unit tests for error handling.
//!
//! This module contains tests for error names, tips and display.

use crate::ast::terms::Term;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnboundIdentifier {
            name: "x".to_string(),
        },
        &Term::ident("x"),
    );

    assert_eq!(error.get_error_name(), "UnboundIdentifier");
    assert_eq!(error.get_term(), "x");
}

#[test]
fn test_error_term_rendering() {
    let term = Term::app(Term::Successor, Term::boolean(true));
    let error = Error::new(
        ErrorImpl::ArgumentTypeMismatch {
            expected: "Integer".to_string(),
            received: "Boolean".to_string(),
        },
        &term,
    );

    assert_eq!(error.get_term(), "(succ true)");
    assert_eq!(error.get_error_name(), "ArgumentTypeMismatch");
}

#[test]
fn test_not_a_function_error() {
    let error = Error::new(
        ErrorImpl::NotAFunction {
            received: "Integer".to_string(),
        },
        &Term::app(Term::num(1), Term::num(2)),
    );

    assert_eq!(error.get_error_name(), "NotAFunction");
}

#[test]
fn test_recursion_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::RecursionTypeMismatch {
            expected: "Integer".to_string(),
            received: "Boolean".to_string(),
        },
        &Term::fix("f", crate::ast::types::Type::Integer, Term::boolean(true)),
    );

    assert_eq!(error.get_error_name(), "RecursionTypeMismatch");
}

#[test]
fn test_conditional_branch_mismatch_error() {
    let error = Error::new(
        ErrorImpl::ConditionalBranchMismatch {
            expected: "Integer".to_string(),
            received: "Boolean".to_string(),
        },
        &Term::cond(Term::boolean(true), Term::num(1), Term::boolean(false)),
    );

    assert_eq!(error.get_error_name(), "ConditionalBranchMismatch");
}

#[test]
fn test_let_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::LetTypeMismatch {
            expected: "Boolean".to_string(),
            received: "Integer".to_string(),
        },
        &Term::let_in("x", crate::ast::types::Type::Boolean, Term::num(1), Term::ident("x")),
    );

    assert_eq!(error.get_error_name(), "LetTypeMismatch");
}

#[test]
fn test_not_a_pair_error() {
    let error = Error::new(
        ErrorImpl::NotAPair {
            received: "Integer".to_string(),
        },
        &Term::first(Term::num(5)),
    );

    assert_eq!(error.get_error_name(), "NotAPair");
    assert_eq!(error.get_term(), "(fst 5)");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::DepthLimitExceeded { limit: 4 }, &Term::num(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_error_name(), "DepthLimitExceeded");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::NotAPair {
            received: "Integer".to_string(),
        },
        &Term::second(Term::num(5)),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("Integer")),
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

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnboundIdentifier {
            name: "y".to_string(),
        },
        &Term::ident("y"),
    );

    assert_eq!(
        error.to_string(),
        "UnboundIdentifier: identifier \"y\" is not bound in `y`"
    );
}
