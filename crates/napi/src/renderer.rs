//! The stateful site renderer and its configuration.

use napi_derive::napi;
use serde_json::Value as JsonValue;
use sitegen_render::{CoverageRegistry, DispatchOptions, Dispatcher};

use crate::batch::run_batch;
use crate::types::{BatchInput, BatchOptions, BatchProcessingResult, DispatchConfig};
use crate::{descriptors_document, read_document, to_json};

/// Renderer bound to one registry and one set of dispatch options.
///
/// Build it once and reuse it across requests; the registry is never mutated
/// after construction.
#[napi]
pub struct SiteRenderer {
    pub(crate) registry: CoverageRegistry,
    pub(crate) options: DispatchOptions,
}

#[napi]
impl SiteRenderer {
    #[napi(constructor)]
    /// Creates a renderer from optional dispatch configuration.
    pub fn new(config: Option<DispatchConfig>) -> napi::Result<Self> {
        let config = config.unwrap_or_default();
        let registry = match config.registry_config() {
            Ok(Some(registry)) => CoverageRegistry::new(registry),
            Ok(None) => CoverageRegistry::default(),
            Err(e) => {
                return Err(napi::Error::new(
                    napi::Status::InvalidArg,
                    format!("Invalid registry configuration: {}", e),
                ));
            }
        };
        Ok(Self {
            registry,
            options: config.dispatch_options(),
        })
    }

    fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.registry).with_options(self.options.clone())
    }

    /// Returns true if `componentType` has a renderer.
    #[napi(js_name = "isRenderable")]
    pub fn is_renderable(&self, component_type: String) -> bool {
        self.registry.is_renderable(&component_type)
    }

    /// Dispatches one document to render blocks.
    #[napi]
    pub fn dispatch(&self, document: JsonValue) -> napi::Result<JsonValue> {
        dispatch_with(&self.dispatcher(), &document)
    }

    /// Dispatches many documents in parallel using Rayon.
    #[napi(js_name = "dispatchBatch")]
    pub fn dispatch_batch(
        &self,
        inputs: Vec<BatchInput>,
        options: Option<BatchOptions>,
    ) -> BatchProcessingResult {
        let dispatcher = self.dispatcher();
        run_batch(inputs, options, |document| dispatch_with(&dispatcher, document))
    }

    /// Distinct descriptor types that this renderer cannot render, sorted.
    #[napi(js_name = "auditTypes")]
    pub fn audit_types(&self, descriptors: JsonValue) -> napi::Result<Vec<String>> {
        let document = descriptors_document(&descriptors)?;
        Ok(self
            .registry
            .audit_types(&document.components)
            .into_iter()
            .collect())
    }
}

pub(crate) fn dispatch_with(
    dispatcher: &Dispatcher<'_>,
    document: &JsonValue,
) -> napi::Result<JsonValue> {
    let document = read_document(document)?;
    to_json(&dispatcher.dispatch(&document))
}
