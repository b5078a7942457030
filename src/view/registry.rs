//! Component registry.
//!
//! Routes declared in configuration name their component by specifier; the
//! registry binds those strings to [`ComponentRef`]s.

use std::collections::HashMap;

use crate::app;
use crate::view::component::ComponentRef;

/// Specifier → component reference lookup.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, ComponentRef>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every module bundled with the application.
    pub fn bundled() -> Self {
        let mut registry = Self::new();
        for specifier in app::MODULES {
            registry.register(ComponentRef::import(specifier));
        }
        registry
    }

    /// Register a component under its specifier, returning any reference it
    /// replaced.
    pub fn register(&mut self, component: ComponentRef) -> Option<ComponentRef> {
        self.modules
            .insert(component.specifier().to_string(), component)
    }

    pub fn get(&self, specifier: &str) -> Option<ComponentRef> {
        self.modules.get(specifier).cloned()
    }

    pub fn contains(&self, specifier: &str) -> bool {
        self.modules.contains_key(specifier)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Registered specifiers in sorted order.
    pub fn specifiers(&self) -> Vec<&str> {
        let mut specifiers: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        specifiers.sort_unstable();
        specifiers
    }
}
