use std::fmt::Display;

use thiserror::Error;

use crate::ast::terms::Term;

/// A typing failure, carrying the rendering of the term whose rule raised it.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    term: String,
}

/// Alias used by consumers that think in terms of typing judgments.
pub type TypingFailure = Error;

impl Error {
    pub fn new(error_impl: ErrorImpl, term: &Term) -> Self {
        Error {
            internal_error: error_impl,
            term: term.render(),
        }
    }

    /// Like [`Error::new`], eliding sub-terms nested deeper than `max_depth`.
    pub fn bounded(error_impl: ErrorImpl, term: &Term, max_depth: usize) -> Self {
        Error {
            internal_error: error_impl,
            term: term.render_bounded(max_depth),
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_term(&self) -> &str {
        &self.term
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnboundIdentifier { .. } => "UnboundIdentifier",
            ErrorImpl::NotAFunction { .. } => "NotAFunction",
            ErrorImpl::ArgumentTypeMismatch { .. } => "ArgumentTypeMismatch",
            ErrorImpl::RecursionTypeMismatch { .. } => "RecursionTypeMismatch",
            ErrorImpl::ConditionalBranchMismatch { .. } => "ConditionalBranchMismatch",
            ErrorImpl::LetTypeMismatch { .. } => "LetTypeMismatch",
            ErrorImpl::NotAPair { .. } => "NotAPair",
            ErrorImpl::DepthLimitExceeded { .. } => "DepthLimitExceeded",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnboundIdentifier { name } => ErrorTip::Suggestion(format!(
                "Identifier `{}` is not bound, did you forget a `fun`, `fix` or `let`?",
                name
            )),
            ErrorImpl::NotAFunction { received } => ErrorTip::Suggestion(format!(
                "Only functions can be applied, received `{}`",
                received
            )),
            ErrorImpl::ArgumentTypeMismatch { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Expected argument type `{}`, received `{}`",
                    expected, received
                ))
            }
            ErrorImpl::RecursionTypeMismatch { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Recursive definition declared as `{}` but its body has type `{}`",
                    expected, received
                ))
            }
            ErrorImpl::ConditionalBranchMismatch { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Expected `{}`, received `{}`",
                    expected, received
                ))
            }
            ErrorImpl::LetTypeMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Binding declared as `{}` but bound to a value of type `{}`",
                expected, received
            )),
            ErrorImpl::NotAPair { received } => ErrorTip::Suggestion(format!(
                "Only pairs can be projected, received `{}`",
                received
            )),
            ErrorImpl::DepthLimitExceeded { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} in `{}`",
            self.get_error_name(),
            self.internal_error,
            self.term
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("identifier {name:?} is not bound")]
    UnboundIdentifier { name: String },
    #[error("expected a function, received {received:?}")]
    NotAFunction { received: String },
    #[error("argument types do not match: expected {expected:?}, received {received:?}")]
    ArgumentTypeMismatch { expected: String, received: String },
    #[error("recursive definition types do not match: expected {expected:?}, received {received:?}")]
    RecursionTypeMismatch { expected: String, received: String },
    #[error("conditional types do not match: expected {expected:?}, received {received:?}")]
    ConditionalBranchMismatch { expected: String, received: String },
    #[error("let binding types do not match: expected {expected:?}, received {received:?}")]
    LetTypeMismatch { expected: String, received: String },
    #[error("expected a pair, received {received:?}")]
    NotAPair { received: String },
    #[error("term nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}
