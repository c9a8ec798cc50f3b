//! Default registry configuration covering the built-in component catalog.
//!
//! Every catalog kind has a renderer. Page chrome (headers, footers, dividers)
//! renders bare; everything else sits inside a page section.

use sitegen_core::ComponentKind;

use super::types::{ComponentDefinition, Layout, RegistryConfig};

/// Kinds that render without a surrounding page section.
pub const BARE_KINDS: &[ComponentKind] = &[
    ComponentKind::Header,
    ComponentKind::Footer,
    ComponentKind::Divider,
];

/// Layout the default registry assigns to a kind.
pub fn default_layout(kind: ComponentKind) -> Layout {
    if BARE_KINDS.contains(&kind) {
        Layout::Bare
    } else {
        Layout::Section
    }
}

/// Creates the default site registry configuration.
///
/// # Example
///
/// ```
/// use sitegen_render::registry::defaults::default_site_registry;
/// use sitegen_render::registry::Layout;
///
/// let registry = default_site_registry();
/// assert_eq!(registry.layout_of("Header"), Some(Layout::Bare));
/// assert_eq!(registry.layout_of("Hero"), Some(Layout::Section));
/// ```
pub fn default_site_registry() -> RegistryConfig {
    RegistryConfig {
        components: ComponentKind::ALL
            .iter()
            .map(|kind| ComponentDefinition::new(kind.as_str(), default_layout(*kind)))
            .collect(),
    }
}
