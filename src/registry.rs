//! Node type registry
//!
//! Maps the `objectType` tag found in a document to a constructor for the
//! matching node type. The decoder never guesses: a tag that is not in the
//! registry is an error.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{RenderboyError, Result};
use crate::model::{Layer, Node, NodeKind, Project, Render, Shot};

/// Builds a default instance of one node type.
pub type Constructor = fn() -> NodeKind;

fn construct<T: Node>() -> NodeKind {
    T::default().into()
}

/// Registry of node types known to the decoder
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    constructors: HashMap<String, Constructor>,
}

impl TypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Create registry with the four project node types
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register_node::<Project>();
        registry.register_node::<Shot>();
        registry.register_node::<Layer>();
        registry.register_node::<Render>();

        registry
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static TypeRegistry {
        static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();
        GLOBAL.get_or_init(TypeRegistry::with_defaults)
    }

    /// Register a constructor under `tag`, replacing any previous one
    pub fn register(&mut self, tag: impl Into<String>, constructor: Constructor) {
        self.constructors.insert(tag.into(), constructor);
    }

    /// Register a node type under its own tag
    pub fn register_node<T: Node>(&mut self) {
        self.register(T::OBJECT_TYPE, construct::<T>);
    }

    /// Look up the constructor for `tag`
    pub fn resolve(&self, tag: &str) -> Result<Constructor> {
        self.constructors
            .get(tag)
            .copied()
            .ok_or_else(|| RenderboyError::UnknownObjectType {
                tag: tag.to_string(),
            })
    }

    /// Check if a tag is registered
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// All registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.constructors.keys().map(|s| s.as_str()).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_defaults() {
        let registry = TypeRegistry::with_defaults();

        assert_eq!(registry.tags(), vec!["Layer", "Project", "Render", "Shot"]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_resolve_builds_default_instance() {
        let registry = TypeRegistry::with_defaults();

        let construct = registry.resolve("Shot").unwrap();
        assert_eq!(construct(), NodeKind::Shot(Shot::default()));
    }

    #[test]
    fn test_resolve_unknown_tag() {
        let registry = TypeRegistry::with_defaults();

        let err = registry.resolve("Bogus").unwrap_err();
        assert!(matches!(err, RenderboyError::UnknownObjectType { ref tag } if tag == "Bogus"));
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("Project").is_err());
    }

    #[test]
    fn test_register_alias() {
        let mut registry = TypeRegistry::new();
        registry.register("RenderLayer", construct::<Layer>);

        assert!(registry.contains("RenderLayer"));
        assert_eq!(
            registry.resolve("RenderLayer").unwrap()().object_type(),
            "Layer"
        );
    }

    #[test]
    fn test_global_is_shared() {
        let a = TypeRegistry::global() as *const TypeRegistry;
        let b = TypeRegistry::global() as *const TypeRegistry;
        assert_eq!(a, b);
        assert!(TypeRegistry::global().contains("Project"));
    }
}
