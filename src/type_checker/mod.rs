//! Type checking module.
//!
//! This module computes the type of a PCF term under a typing environment,
//! or reports why the term is ill-typed. It provides:
//!
//! - A persistent environment that is extended, never mutated, per binding
//! - One typing rule per term shape, applied in a single top-down pass
//! - Configuration for scoping of `let`/pair sub-terms and nesting depth
//!
//! Checking stops at the first failure; there is no unification and no
//! backtracking since every binding form is annotated.

pub mod config;
pub mod environment;
pub mod type_checker;
