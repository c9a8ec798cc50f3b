#![deny(missing_docs)]
//! Node.js bindings that surface sitegen's normalization and dispatch.

use napi::bindgen_prelude::*;
use napi_derive::napi;
use serde::Serialize;
use serde_json::Value as JsonValue;
use sitegen_core::{ComponentKind, Document, DocumentError, Normalizer};

/// Batch processing over independent documents.
pub mod batch;
/// The stateful site renderer.
pub mod renderer;
/// NAPI-exposed data structures.
pub mod types;

pub use batch::run_batch;
pub use renderer::SiteRenderer;
pub use types::*;

/// Normalizes the props of one component.
///
/// Never fails: unknown types pass through and malformed props fall back to
/// defaults. Missing props are treated as `null`.
#[napi(js_name = "normalizeProps")]
pub fn normalize_props(component_type: String, props: Option<JsonValue>) -> JsonValue {
    let props = props.unwrap_or(JsonValue::Null);
    Normalizer::new()
        .normalize(&component_type, &props)
        .to_value()
}

/// Normalizes every component of a `{components: [...]}` document.
#[napi(js_name = "normalizeDocument")]
pub fn normalize_document(document: JsonValue) -> napi::Result<JsonValue> {
    normalize_json(&document)
}

/// Dispatches a document to render blocks.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { dispatchDocument } = require('sitegen-napi');
///
/// const result = dispatchDocument(
///   { websiteName: 'Le Bistro', components: [{ id: 'h', type: 'Header', props: {} }] },
///   { replaceRelativeImages: true },
/// );
/// // result.blocks[0] = { type: 'component', id: 'h', name: 'Header', layout: 'bare', props: {...} }
/// ```
#[napi(js_name = "dispatchDocument")]
pub fn dispatch_document(
    document: JsonValue,
    config: Option<DispatchConfig>,
) -> napi::Result<JsonValue> {
    SiteRenderer::new(config)?.dispatch(document)
}

/// Returns the distinct descriptor types that have no renderer in the default
/// registry, sorted.
#[napi(js_name = "auditTypes")]
pub fn audit_types(descriptors: JsonValue) -> napi::Result<Vec<String>> {
    let document = descriptors_document(&descriptors)?;
    Ok(sitegen_render::audit_types(&document.components)
        .into_iter()
        .collect())
}

/// Lists every built-in component type tag in catalog order.
#[napi(js_name = "componentTypes")]
pub fn component_types() -> Vec<String> {
    ComponentKind::ALL
        .iter()
        .map(|kind| kind.as_str().to_string())
        .collect()
}

/// Normalizes multiple documents in parallel using Rayon.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { normalizeBatch } = require('sitegen-napi');
///
/// const result = normalizeBatch(
///   [{ id: 'bistro', document: { components: [...] } }],
///   { maxThreads: 4 },
/// );
/// console.log(`Processed ${result.stats.total} documents in ${result.stats.processingTimeMs}ms`);
/// ```
#[napi(js_name = "normalizeBatch")]
pub fn normalize_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchProcessingResult> {
    Ok(run_batch(inputs, options, normalize_json))
}

fn normalize_json(document: &JsonValue) -> napi::Result<JsonValue> {
    let document = read_document(document)?;
    to_json(&Normalizer::new().normalize_document(&document))
}

pub(crate) fn read_document(document: &JsonValue) -> napi::Result<Document> {
    Document::from_value(document).map_err(convert_error)
}

/// Reads a bare descriptor list as a document; `null` is an empty list.
pub(crate) fn descriptors_document(descriptors: &JsonValue) -> napi::Result<Document> {
    read_document(&serde_json::json!({ "components": descriptors }))
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> napi::Result<JsonValue> {
    serde_json::to_value(value)
        .map_err(|e| Error::from_reason(format!("Serialization error: {}", e)))
}

fn convert_error(err: DocumentError) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}
