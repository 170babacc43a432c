/// Which environment `let` bindings and pair forms are checked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopePolicy {
    /// A `let`'s bound expression and the operands of `Pair`, `First` and
    /// `Second` are checked under the empty environment, so they cannot
    /// reference outer bindings.
    #[default]
    Isolated,
    /// Those sub-terms see the current environment like every other rule.
    Ambient,
}

/// Options for a [`super::type_checker::TypeChecker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckerConfig {
    pub scope_policy: ScopePolicy,
    /// Maximum nesting depth before checking gives up. `None` is unbounded.
    pub max_depth: Option<usize>,
}

impl CheckerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope_policy(mut self, scope_policy: ScopePolicy) -> Self {
        self.scope_policy = scope_policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
