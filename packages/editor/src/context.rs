//! Per-document face state.
//!
//! Each editing context (one open document) owns exactly one current
//! [`AttributeMap`]. The registry is passed around explicitly; there is no
//! process-global face.

use crate::AttributeMap;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContextId(String);

impl ContextId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContextId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default)]
pub struct ContextRegistry {
    faces: BTreeMap<ContextId, AttributeMap>,
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The context's face, created empty on first use
    pub fn current(&mut self, id: &ContextId) -> &mut AttributeMap {
        self.faces.entry(id.clone()).or_insert_with(|| {
            tracing::debug!("[ContextRegistry] new face for {}", id);
            AttributeMap::new()
        })
    }

    /// Install a prior value as the context's face
    pub fn load(&mut self, id: ContextId, map: AttributeMap) {
        self.faces.insert(id, map);
    }

    pub fn get(&self, id: &ContextId) -> Option<&AttributeMap> {
        self.faces.get(id)
    }

    /// Forget the context's face; returns it if there was one
    pub fn clear(&mut self, id: &ContextId) -> Option<AttributeMap> {
        self.faces.remove(id)
    }

    pub fn contexts(&self) -> impl Iterator<Item = &ContextId> {
        self.faces.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceplate_literal::Value;

    #[test]
    fn test_current_creates_empty() {
        let mut registry = ContextRegistry::new();
        let id = ContextId::from("a.txt");

        assert!(registry.get(&id).is_none());
        assert!(registry.current(&id).is_empty());
        assert!(registry.get(&id).is_some());
    }

    #[test]
    fn test_contexts_are_independent() {
        let mut registry = ContextRegistry::new();
        let a = ContextId::from("a.txt");
        let b = ContextId::from("b.txt");

        *registry.current(&a) = AttributeMap::new().with(":weight", Value::symbol("bold"));

        assert_eq!(registry.current(&a).len(), 1);
        assert!(registry.current(&b).is_empty());
        let ids: Vec<_> = registry.contexts().map(ContextId::as_str).collect();
        assert_eq!(ids, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_load_and_clear() {
        let mut registry = ContextRegistry::new();
        let id = ContextId::from("a.txt");
        let prior = AttributeMap::new().with(":height", 1.5);

        registry.load(id.clone(), prior.clone());
        assert_eq!(registry.get(&id), Some(&prior));

        assert_eq!(registry.clear(&id), Some(prior));
        assert!(registry.current(&id).is_empty());
    }
}
