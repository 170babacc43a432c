use std::collections::HashMap;

use lazy_static::lazy_static;
use log::{debug, trace};

use crate::{
    ast::{terms::Term, types::Type},
    errors::errors::{Error, ErrorImpl},
};

use super::{
    config::{CheckerConfig, ScopePolicy},
    environment::Environment,
};

lazy_static! {
    pub static ref BUILT_IN_LOOKUP: HashMap<&'static str, Type> = {
        let mut map = HashMap::new();
        map.insert("succ", Type::function(Type::Integer, Type::Integer));
        map.insert("pred", Type::function(Type::Integer, Type::Integer));
        map.insert("iszero", Type::function(Type::Integer, Type::Boolean));
        map
    };
}

#[derive(Debug, Clone, Default)]
pub struct TypeChecker {
    config: CheckerConfig,
}

impl TypeChecker {
    pub fn new(config: CheckerConfig) -> Self {
        TypeChecker { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Computes the type of `term` under `env`, or the first typing failure.
    pub fn check(&self, term: &Term, env: &Environment) -> Result<Type, Error> {
        self.check_at(term, env, 0)
    }

    /// Environment for sub-terms the scope policy may isolate.
    fn inner_scope(&self, env: &Environment) -> Environment {
        match self.config.scope_policy {
            ScopePolicy::Isolated => Environment::new(),
            ScopePolicy::Ambient => env.clone(),
        }
    }

    fn bind(&self, env: &Environment, name: &str, ty: &Type) -> Environment {
        trace!("binding `{}` : {}", name, ty);
        env.extend(name, ty.clone())
    }

    /// Builds a failure for `term`. Under a depth limit the rendering is cut
    /// off at the same depth, since the term may be arbitrarily deep below.
    fn fail(&self, error_impl: ErrorImpl, term: &Term) -> Error {
        let error = match self.config.max_depth {
            Some(limit) => Error::bounded(error_impl, term, limit),
            None => Error::new(error_impl, term),
        };
        debug!("type error: {}", error);
        error
    }

    fn check_at(&self, term: &Term, env: &Environment, depth: usize) -> Result<Type, Error> {
        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                return Err(self.fail(ErrorImpl::DepthLimitExceeded { limit }, term));
            }
        }

        let depth = depth + 1;
        let ty = match term {
            Term::Identifier { name } => match env.lookup(name) {
                Some(ty) => ty,
                None => {
                    return Err(self.fail(
                        ErrorImpl::UnboundIdentifier { name: name.clone() },
                        term,
                    ))
                }
            },
            Term::NumberLiteral { .. } => Type::Integer,
            Term::BoolLiteral { .. } => Type::Boolean,
            Term::Successor => BUILT_IN_LOOKUP["succ"].clone(),
            Term::Predecessor => BUILT_IN_LOOKUP["pred"].clone(),
            Term::IsZero => BUILT_IN_LOOKUP["iszero"].clone(),
            Term::Function {
                param_name,
                param_type,
                body,
            } => {
                let body_env = self.bind(env, param_name, param_type);
                let body_type = self.check_at(body, &body_env, depth)?;
                Type::function(param_type.clone(), body_type)
            }
            Term::Application { callee, argument } => {
                let (domain, range) = match self.check_at(callee, env, depth)? {
                    Type::Function { domain, range } => (*domain, *range),
                    other => {
                        return Err(self.fail(
                            ErrorImpl::NotAFunction {
                                received: other.render(),
                            },
                            term,
                        ))
                    }
                };

                let argument_type = self.check_at(argument, env, depth)?;
                if !argument_type.equals(&domain) {
                    return Err(self.fail(
                        ErrorImpl::ArgumentTypeMismatch {
                            expected: domain.render(),
                            received: argument_type.render(),
                        },
                        term,
                    ));
                }

                range
            }
            Term::RecursiveDef {
                name,
                declared_type,
                body,
            } => {
                let body_env = self.bind(env, name, declared_type);
                let body_type = self.check_at(body, &body_env, depth)?;
                if !body_type.equals(declared_type) {
                    return Err(self.fail(
                        ErrorImpl::RecursionTypeMismatch {
                            expected: declared_type.render(),
                            received: body_type.render(),
                        },
                        term,
                    ));
                }

                declared_type.clone()
            }
            Term::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition_type = self.check_at(condition, env, depth)?;
                let then_type = self.check_at(then_branch, env, depth)?;
                let else_type = self.check_at(else_branch, env, depth)?;

                if !condition_type.equals(&Type::Boolean) {
                    return Err(self.fail(
                        ErrorImpl::ConditionalBranchMismatch {
                            expected: Type::Boolean.render(),
                            received: condition_type.render(),
                        },
                        term,
                    ));
                }
                if !then_type.equals(&else_type) {
                    return Err(self.fail(
                        ErrorImpl::ConditionalBranchMismatch {
                            expected: then_type.render(),
                            received: else_type.render(),
                        },
                        term,
                    ));
                }

                then_type
            }
            Term::Let {
                name,
                declared_type,
                binding_expr,
                body_expr,
            } => {
                let scope = self.inner_scope(env);
                let binding_type = self.check_at(binding_expr, &scope, depth)?;
                if !binding_type.equals(declared_type) {
                    return Err(self.fail(
                        ErrorImpl::LetTypeMismatch {
                            expected: declared_type.render(),
                            received: binding_type.render(),
                        },
                        term,
                    ));
                }

                let body_env = self.bind(env, name, declared_type);
                self.check_at(body_expr, &body_env, depth)?
            }
            Term::Pair { first, second } => {
                let scope = self.inner_scope(env);
                let first_type = self.check_at(first, &scope, depth)?;
                let second_type = self.check_at(second, &scope, depth)?;
                Type::pair(first_type, second_type)
            }
            Term::First { pair_expr } | Term::Second { pair_expr } => {
                let scope = self.inner_scope(env);
                let (first, second) = match self.check_at(pair_expr, &scope, depth)? {
                    Type::Pair { first, second } => (*first, *second),
                    other => {
                        return Err(self.fail(
                            ErrorImpl::NotAPair {
                                received: other.render(),
                            },
                            term,
                        ))
                    }
                };

                if let Term::First { .. } = term {
                    first
                } else {
                    second
                }
            }
        };

        debug!("{} : {}", term, ty);
        Ok(ty)
    }
}

/// Checks `term` under `env` with the default configuration.
pub fn type_check(term: &Term, env: &Environment) -> Result<Type, Error> {
    TypeChecker::default().check(term, env)
}

/// Like [`type_check`], but collapses any failure into the `Error` sentinel type.
pub fn type_of(term: &Term, env: &Environment) -> Type {
    type_check(term, env).unwrap_or(Type::Error)
}
