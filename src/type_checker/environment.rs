use im::HashMap as ImHashMap;

use crate::ast::types::Type;

/// Typing environment mapping identifiers to their declared types.
///
/// Backed by a persistent map, so cloning is O(1) and [`Environment::extend`]
/// leaves the original untouched. Sibling branches of a check each hold
/// their own value and can never observe each other's bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: ImHashMap<String, Type>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: ImHashMap::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new()
    }

    pub fn lookup(&self, name: &str) -> Option<Type> {
        self.bindings.get(name).cloned()
    }

    /// Returns a new environment with `name` rebound to `ty`.
    pub fn extend(&self, name: &str, ty: Type) -> Environment {
        Environment {
            bindings: self.bindings.update(name.to_string(), ty),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Type)> {
        self.bindings.iter()
    }
}

impl FromIterator<(String, Type)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, Type)>>(iter: I) -> Self {
        Environment {
            bindings: iter.into_iter().collect(),
        }
    }
}
