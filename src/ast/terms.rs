//! Term definitions for the PCF abstract syntax.
//!
//! Terms are finite trees: every composite term owns its sub-terms, nothing is
//! shared and nothing is mutated after construction. Binding forms carry an
//! explicit declared type, so the checker never has to reconstruct one.

use std::fmt::Display;

use super::types::Type;

/// Represents a PCF term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Identifier {
        name: String,
    },
    NumberLiteral {
        value: u64,
    },
    BoolLiteral {
        value: bool,
    },
    Successor,
    Predecessor,
    IsZero,
    Function {
        param_name: String,
        param_type: Type,
        body: Box<Term>,
    },
    Application {
        callee: Box<Term>,
        argument: Box<Term>,
    },
    RecursiveDef {
        name: String,
        declared_type: Type,
        body: Box<Term>,
    },
    Conditional {
        condition: Box<Term>,
        then_branch: Box<Term>,
        else_branch: Box<Term>,
    },
    Let {
        name: String,
        declared_type: Type,
        binding_expr: Box<Term>,
        body_expr: Box<Term>,
    },
    Pair {
        first: Box<Term>,
        second: Box<Term>,
    },
    First {
        pair_expr: Box<Term>,
    },
    Second {
        pair_expr: Box<Term>,
    },
}

impl Term {
    pub fn ident(name: impl Into<String>) -> Self {
        Term::Identifier { name: name.into() }
    }

    pub fn num(value: u64) -> Self {
        Term::NumberLiteral { value }
    }

    pub fn boolean(value: bool) -> Self {
        Term::BoolLiteral { value }
    }

    pub fn function(param_name: impl Into<String>, param_type: Type, body: Term) -> Self {
        Term::Function {
            param_name: param_name.into(),
            param_type,
            body: Box::new(body),
        }
    }

    pub fn app(callee: Term, argument: Term) -> Self {
        Term::Application {
            callee: Box::new(callee),
            argument: Box::new(argument),
        }
    }

    pub fn fix(name: impl Into<String>, declared_type: Type, body: Term) -> Self {
        Term::RecursiveDef {
            name: name.into(),
            declared_type,
            body: Box::new(body),
        }
    }

    pub fn cond(condition: Term, then_branch: Term, else_branch: Term) -> Self {
        Term::Conditional {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn let_in(
        name: impl Into<String>,
        declared_type: Type,
        binding_expr: Term,
        body_expr: Term,
    ) -> Self {
        Term::Let {
            name: name.into(),
            declared_type,
            binding_expr: Box::new(binding_expr),
            body_expr: Box::new(body_expr),
        }
    }

    pub fn pair(first: Term, second: Term) -> Self {
        Term::Pair {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn first(pair_expr: Term) -> Self {
        Term::First {
            pair_expr: Box::new(pair_expr),
        }
    }

    pub fn second(pair_expr: Term) -> Self {
        Term::Second {
            pair_expr: Box::new(pair_expr),
        }
    }

    /// Keyword of a built-in primitive, `None` for every other term.
    pub fn built_in_name(&self) -> Option<&'static str> {
        match self {
            Term::Successor => Some("succ"),
            Term::Predecessor => Some("pred"),
            Term::IsZero => Some("iszero"),
            _ => None,
        }
    }

    /// Height of the term tree. Leaves have depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Term::Identifier { .. }
            | Term::NumberLiteral { .. }
            | Term::BoolLiteral { .. }
            | Term::Successor
            | Term::Predecessor
            | Term::IsZero => 0,
            Term::Function { body, .. } | Term::RecursiveDef { body, .. } => 1 + body.depth(),
            Term::Application { callee, argument } => 1 + callee.depth().max(argument.depth()),
            Term::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                1 + condition
                    .depth()
                    .max(then_branch.depth())
                    .max(else_branch.depth())
            }
            Term::Let {
                binding_expr,
                body_expr,
                ..
            } => 1 + binding_expr.depth().max(body_expr.depth()),
            Term::Pair { first, second } => 1 + first.depth().max(second.depth()),
            Term::First { pair_expr } | Term::Second { pair_expr } => 1 + pair_expr.depth(),
        }
    }

    /// One-line rendering used in diagnostics.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Like [`Term::render`], but sub-terms nested deeper than `max_depth`
    /// below this one are elided as `…`.
    pub fn render_bounded(&self, max_depth: usize) -> String {
        Bounded {
            term: self,
            budget: Some(max_depth),
        }
        .to_string()
    }

    fn is_leaf(&self) -> bool {
        matches!(
            self,
            Term::Identifier { .. }
                | Term::NumberLiteral { .. }
                | Term::BoolLiteral { .. }
                | Term::Successor
                | Term::Predecessor
                | Term::IsZero
        )
    }
}

/// Renders a term with an optional budget of nesting levels left to print.
struct Bounded<'a> {
    term: &'a Term,
    budget: Option<usize>,
}

impl<'a> Bounded<'a> {
    fn child(&self, term: &'a Term) -> Bounded<'a> {
        Bounded {
            term,
            budget: self.budget.map(|budget| budget.saturating_sub(1)),
        }
    }
}

impl Display for Bounded<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.budget == Some(0) && !self.term.is_leaf() {
            return write!(f, "…");
        }

        match self.term {
            Term::Identifier { name } => write!(f, "{}", name),
            Term::NumberLiteral { value } => write!(f, "{}", value),
            Term::BoolLiteral { value } => write!(f, "{}", value),
            Term::Successor | Term::Predecessor | Term::IsZero => {
                write!(f, "{}", self.term.built_in_name().unwrap_or_default())
            }
            Term::Function {
                param_name,
                param_type,
                body,
            } => write!(
                f,
                "(fun {} : {} => {})",
                param_name,
                param_type,
                self.child(body)
            ),
            Term::Application { callee, argument } => {
                write!(f, "({} {})", self.child(callee), self.child(argument))
            }
            Term::RecursiveDef {
                name,
                declared_type,
                body,
            } => write!(
                f,
                "(fix {} : {} => {})",
                name,
                declared_type,
                self.child(body)
            ),
            Term::Conditional {
                condition,
                then_branch,
                else_branch,
            } => write!(
                f,
                "(if {} then {} else {})",
                self.child(condition),
                self.child(then_branch),
                self.child(else_branch)
            ),
            Term::Let {
                name,
                declared_type,
                binding_expr,
                body_expr,
            } => write!(
                f,
                "(let {} : {} = {} in {})",
                name,
                declared_type,
                self.child(binding_expr),
                self.child(body_expr)
            ),
            Term::Pair { first, second } => {
                write!(f, "({}, {})", self.child(first), self.child(second))
            }
            Term::First { pair_expr } => write!(f, "(fst {})", self.child(pair_expr)),
            Term::Second { pair_expr } => write!(f, "(snd {})", self.child(pair_expr)),
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Bounded {
            term: self,
            budget: None,
        }
        .fmt(f)
    }
}
