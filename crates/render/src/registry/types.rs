//! Registry type definitions for renderable component types.

use serde::{Deserialize, Serialize};

/// Configuration for the coverage registry, usually loaded from JSON.
///
/// ```
/// use sitegen_render::registry::{Layout, RegistryConfig};
///
/// let config = RegistryConfig::from_json_str(
///     r#"{"components": [{"name": "Hero"}, {"name": "Footer", "layout": "bare"}]}"#,
/// ).unwrap();
/// assert_eq!(config.layout_of("Hero"), Some(Layout::Section));
/// assert_eq!(config.layout_of("Footer"), Some(Layout::Bare));
/// assert_eq!(config.layout_of("Gallery"), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Component types that have a renderer.
    #[serde(default)]
    pub components: Vec<ComponentDefinition>,
}

/// A single renderer definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    /// Component type tag (e.g., "Hero", "FAQ").
    pub name: String,
    /// How the page wraps the rendered component.
    #[serde(default)]
    pub layout: Layout,
}

impl ComponentDefinition {
    /// Creates a definition with the given layout.
    pub fn new(name: impl Into<String>, layout: Layout) -> Self {
        Self {
            name: name.into(),
            layout,
        }
    }
}

/// Page-level wrapping for a rendered component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    /// Wrapped in a padded, width-constrained page section.
    #[default]
    Section,
    /// Rendered edge to edge (headers, footers, dividers).
    Bare,
}

impl RegistryConfig {
    /// Parses a registry configuration from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Get the definition for a component type. The first definition wins.
    pub fn get_component(&self, name: &str) -> Option<&ComponentDefinition> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Get the layout for a component type.
    pub fn layout_of(&self, name: &str) -> Option<Layout> {
        self.get_component(name).map(|c| c.layout)
    }
}
