#![allow(clippy::module_inception)]

//! Static type checker for PCF, a small typed lambda calculus with naturals,
//! booleans, conditionals, recursion, let-bindings and pairs.
//!
//! Terms are built directly (there is no parser) and checked with
//! [`type_checker::type_checker::type_check`]:
//!
//! ```
//! use pcf_typeck::ast::{terms::Term, types::Type};
//! use pcf_typeck::type_checker::{environment::Environment, type_checker::type_check};
//!
//! let term = Term::app(Term::Successor, Term::num(41));
//! assert_eq!(type_check(&term, &Environment::empty()), Ok(Type::Integer));
//! ```

pub mod ast;
pub mod errors;
pub mod type_checker;

use crate::{
    ast::{terms::Term, types::Type},
    errors::errors::{Error, ErrorTip},
};

/// Formats a check result the way the driver displays it.
pub fn display_result(term: &Term, result: &Result<Type, Error>) -> String {
    match result {
        Ok(ty) => format!("{} : {}", term, ty),
        Err(error) => {
            if let ErrorTip::None = error.get_tip() {
                format!("Error: {}\n-> {}", error.get_error_name(), error.get_term())
            } else {
                format!(
                    "Error: {} ({})\n-> {}",
                    error.get_error_name(),
                    error.get_tip(),
                    error.get_term()
                )
            }
        }
    }
}
