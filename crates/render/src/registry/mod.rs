//! Type coverage registry: which component types can actually be rendered.

pub mod defaults;
pub mod types;

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use sitegen_core::{ComponentDescriptor, ComponentKind};

pub use defaults::default_site_registry;
pub use types::{ComponentDefinition, Layout, RegistryConfig};

static DEFAULT_REGISTRY: Lazy<CoverageRegistry> =
    Lazy::new(|| CoverageRegistry::new(default_site_registry()));

/// Read-only set of renderable type tags built from a [`RegistryConfig`].
#[derive(Debug, Clone)]
pub struct CoverageRegistry {
    config: RegistryConfig,
    layouts: HashMap<String, Layout>,
}

impl CoverageRegistry {
    /// Builds a registry and logs any catalog kinds that have no renderer.
    pub fn new(config: RegistryConfig) -> Self {
        let mut layouts = HashMap::with_capacity(config.components.len());
        for definition in &config.components {
            layouts
                .entry(definition.name.clone())
                .or_insert(definition.layout);
        }
        let registry = Self { config, layouts };
        let missing = registry.missing_renderers();
        if !missing.is_empty() {
            let tags: Vec<&str> = missing.iter().map(|kind| kind.as_str()).collect();
            log::warn!(
                "Registry has no renderer for {} catalog type(s): {}",
                tags.len(),
                tags.join(", ")
            );
        }
        registry
    }

    /// The process-wide registry covering the whole catalog.
    pub fn global() -> &'static CoverageRegistry {
        &DEFAULT_REGISTRY
    }

    /// The configuration this registry was built from.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns true if `tag` has a renderer.
    pub fn is_renderable(&self, tag: &str) -> bool {
        self.layouts.contains_key(tag)
    }

    /// Layout of the renderer for `tag`, if there is one.
    pub fn layout(&self, tag: &str) -> Option<Layout> {
        self.layouts.get(tag).copied()
    }

    /// Distinct type tags with no renderer, in sorted order.
    ///
    /// Never mutates its input; the result is empty when every tag is covered.
    pub fn audit_tags<'a>(&self, tags: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
        let unknown: BTreeSet<String> = tags
            .into_iter()
            .filter(|tag| !self.is_renderable(tag))
            .map(str::to_string)
            .collect();
        if !unknown.is_empty() {
            let list: Vec<&str> = unknown.iter().map(String::as_str).collect();
            log::warn!("Unknown component types: {}", list.join(", "));
        }
        unknown
    }

    /// Distinct descriptor types with no renderer.
    pub fn audit_types(&self, descriptors: &[ComponentDescriptor]) -> BTreeSet<String> {
        self.audit_tags(descriptors.iter().map(|d| d.component_type.as_str()))
    }

    /// Catalog kinds with no renderer in this registry, in catalog order.
    pub fn missing_renderers(&self) -> Vec<ComponentKind> {
        ComponentKind::ALL
            .iter()
            .copied()
            .filter(|kind| !self.is_renderable(kind.as_str()))
            .collect()
    }
}

impl Default for CoverageRegistry {
    fn default() -> Self {
        Self::new(default_site_registry())
    }
}

/// Audits descriptors against the default registry.
pub fn audit_types(descriptors: &[ComponentDescriptor]) -> BTreeSet<String> {
    CoverageRegistry::global().audit_types(descriptors)
}
