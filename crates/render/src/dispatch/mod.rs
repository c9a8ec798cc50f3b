//! Render dispatch: canonical props to render blocks, with placeholders for
//! types that have no renderer.

pub mod images;
pub mod types;

use sitegen_core::{ComponentDescriptor, Document, Normalizer, Warning};

use crate::registry::CoverageRegistry;

pub use images::{apply_image_policy, is_absolute_url};
pub use types::{DispatchOptions, DispatchResult, FALLBACK_IMAGE, RenderBlock};

/// Maps descriptors to render blocks against one registry.
#[derive(Debug, Clone)]
pub struct Dispatcher<'r> {
    registry: &'r CoverageRegistry,
    normalizer: Normalizer,
    options: DispatchOptions,
}

impl Default for Dispatcher<'static> {
    fn default() -> Self {
        Dispatcher::new(CoverageRegistry::global())
    }
}

impl<'r> Dispatcher<'r> {
    /// Creates a dispatcher with built-in rules and default options.
    pub fn new(registry: &'r CoverageRegistry) -> Self {
        Self {
            registry,
            normalizer: Normalizer::new(),
            options: DispatchOptions::default(),
        }
    }

    /// Replaces the dispatch options.
    pub fn with_options(mut self, options: DispatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the normalizer, e.g. one with extension rules registered.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// The registry this dispatcher renders against.
    pub fn registry(&self) -> &'r CoverageRegistry {
        self.registry
    }

    /// Normalizes one descriptor and wraps it in a block.
    ///
    /// Types without a renderer become a placeholder and are not normalized.
    pub fn dispatch_component(&self, descriptor: &ComponentDescriptor) -> RenderBlock {
        let Some(layout) = self.registry.layout(&descriptor.component_type) else {
            log::debug!(
                "Rendering placeholder for unknown component type `{}` ({})",
                descriptor.component_type,
                descriptor.id
            );
            return RenderBlock::placeholder(&descriptor.id, &descriptor.component_type);
        };
        let mut props = self
            .normalizer
            .normalize(&descriptor.component_type, &descriptor.props);
        apply_image_policy(&mut props, &self.options);
        RenderBlock::Component {
            id: descriptor.id.clone(),
            name: descriptor.component_type.clone(),
            layout,
            props,
        }
    }

    /// Dispatches a whole document, strictly in document order.
    pub fn dispatch(&self, document: &Document) -> DispatchResult {
        let mut diagnostics = document.check_ids();
        let blocks: Vec<RenderBlock> = document
            .components
            .iter()
            .map(|descriptor| self.dispatch_component(descriptor))
            .collect();
        for block in &blocks {
            if let RenderBlock::Placeholder {
                id, component_type, ..
            } = block
            {
                diagnostics.add_warning(Warning::UnknownComponent {
                    id: id.clone(),
                    component_type: component_type.clone(),
                });
            }
        }
        DispatchResult {
            site: document.site.clone(),
            blocks,
            unknown_types: self.registry.audit_types(&document.components),
            diagnostics,
        }
    }
}

/// Dispatches a document against the default registry with default options.
pub fn dispatch(document: &Document) -> DispatchResult {
    Dispatcher::default().dispatch(document)
}
