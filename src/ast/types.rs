//! Type definitions for PCF terms.
//!
//! PCF types are a closed set of four shapes:
//!
//! - `Integer` for naturals
//! - `Boolean` for truth values
//! - `Function` from a domain to a range
//! - `Pair` of two component types
//!
//! Equality is purely structural: two types are equal when their shapes match
//! and every component is recursively equal. There is no subtyping and there
//! are no type variables.

use std::fmt::Display;

/// Represents a PCF type.
///
/// `Error` is the sentinel produced by [`crate::type_checker::type_checker::type_of`]
/// for ill-typed terms. It renders as `Error` and is only equal to itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Integer,
    Boolean,
    Function { domain: Box<Type>, range: Box<Type> },
    Pair { first: Box<Type>, second: Box<Type> },
    Error,
}

impl Type {
    pub fn function(domain: Type, range: Type) -> Self {
        Type::Function {
            domain: Box::new(domain),
            range: Box::new(range),
        }
    }

    pub fn pair(first: Type, second: Type) -> Self {
        Type::Pair {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Structural equality, the same relation as `==`.
    pub fn equals(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Integer, Type::Integer) => true,
            (Type::Boolean, Type::Boolean) => true,
            (Type::Error, Type::Error) => true,
            (
                Type::Function { domain, range },
                Type::Function {
                    domain: other_domain,
                    range: other_range,
                },
            ) => domain.equals(other_domain) && range.equals(other_range),
            (
                Type::Pair { first, second },
                Type::Pair {
                    first: other_first,
                    second: other_second,
                },
            ) => first.equals(other_first) && second.equals(other_second),
            _ => false,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function { .. })
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Type::Pair { .. })
    }

    /// Returns `(domain, range)` for function types.
    pub fn function_parts(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Function { domain, range } => Some((domain.as_ref(), range.as_ref())),
            _ => None,
        }
    }

    /// Returns `(first, second)` for pair types.
    pub fn pair_parts(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Pair { first, second } => Some((first.as_ref(), second.as_ref())),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Integer => write!(f, "Integer"),
            Type::Boolean => write!(f, "Boolean"),
            Type::Function { domain, range } => write!(f, "{} -> {}", domain, range),
            Type::Pair { first, second } => write!(f, "({}, {})", first, second),
            Type::Error => write!(f, "Error"),
        }
    }
}
