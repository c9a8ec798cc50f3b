use serde::Serialize;
use serde_json::Value;
use sitegen_core::{ComponentKind, Document, DocumentError, NormalizedDocument, Normalizer};
use sitegen_render::{DispatchOptions, DispatchResult, Dispatcher};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Value helpers
// ============================================================================

/// Normalizes one `(type, props)` pair to its canonical JSON form.
pub fn normalize_value(component_type: &str, props: &Value) -> Value {
    Normalizer::new().normalize(component_type, props).to_value()
}

/// Reads a document envelope and normalizes every component.
pub fn normalize_document_value(input: &Value) -> Result<NormalizedDocument, DocumentError> {
    let document = Document::from_value(input)?;
    Ok(Normalizer::new().normalize_document(&document))
}

/// Reads a document envelope and dispatches it against the default registry.
pub fn dispatch_document_value(
    input: &Value,
    options: DispatchOptions,
) -> Result<DispatchResult, DocumentError> {
    let document = Document::from_value(input)?;
    Ok(Dispatcher::default().with_options(options).dispatch(&document))
}

/// Distinct type tags in `descriptors` that have no renderer, sorted.
///
/// `descriptors` is a list of raw descriptor objects; `null` is an empty list.
pub fn audit_types_value(descriptors: &Value) -> Result<Vec<String>, DocumentError> {
    let envelope = serde_json::json!({ "components": descriptors });
    let document = Document::from_value(&envelope)?;
    Ok(sitegen_render::audit_types(&document.components)
        .into_iter()
        .collect())
}

// ============================================================================
// JS conversions
// ============================================================================

fn from_js(value: JsValue) -> Result<Value, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&format!("Invalid input: {}", e)))
}

fn parse_options(options: JsValue) -> Result<DispatchOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(DispatchOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

// Plain objects instead of ES `Map`s for JSON maps.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn document_error(error: DocumentError) -> JsError {
    JsError::new(&error.to_string())
}

// ============================================================================
// Exports
// ============================================================================

/// Normalizes the props of one component.
///
/// Never throws for well-formed JS values: unknown types pass through and
/// malformed props fall back to defaults.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { normalize } from './sitegen_wasm';
///
/// normalize('Hero', { heading: 'Welcome', cta: { text: 'Book' } });
/// // { title: 'Welcome', subtitle: '', primaryCta: { label: 'Book', href: '#' } }
/// ```
#[wasm_bindgen]
pub fn normalize(component_type: &str, props: JsValue) -> Result<JsValue, JsError> {
    let props = from_js(props)?;
    to_js(&normalize_value(component_type, &props))
}

/// Normalizes every component of a `{components: [...]}` document.
#[wasm_bindgen(js_name = normalizeDocument)]
pub fn normalize_document(input: JsValue) -> Result<JsValue, JsError> {
    let input = from_js(input)?;
    let normalized = normalize_document_value(&input).map_err(document_error)?;
    to_js(&normalized)
}

/// Dispatches a document to render blocks.
///
/// `options` accepts `{fallbackImage, replaceRelativeImages}`; both are optional.
#[wasm_bindgen(js_name = dispatchDocument)]
pub fn dispatch_document(input: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let options = parse_options(options)?;
    let input = from_js(input)?;
    let result = dispatch_document_value(&input, options).map_err(document_error)?;
    to_js(&result)
}

/// Returns the distinct descriptor types that have no renderer.
#[wasm_bindgen(js_name = auditTypes)]
pub fn audit_types(descriptors: JsValue) -> Result<JsValue, JsError> {
    let descriptors = from_js(descriptors)?;
    let unknown = audit_types_value(&descriptors).map_err(document_error)?;
    to_js(&unknown)
}

/// Lists every built-in component type tag in catalog order.
#[wasm_bindgen(js_name = componentTypes)]
pub fn component_types() -> js_sys::Array {
    ComponentKind::ALL
        .iter()
        .map(|kind| JsValue::from_str(kind.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_value_resolves_aliases() {
        let value = normalize_value("Hero", &json!({"heading": "Welcome", "cta": {"text": "Book"}}));
        assert_eq!(value["title"], "Welcome");
        assert_eq!(value["primaryCta"]["label"], "Book");
        assert_eq!(value["primaryCta"]["href"], "#");
    }

    #[test]
    fn normalize_value_passes_unknown_through() {
        let props = json!({"x": [1, 2]});
        assert_eq!(normalize_value("Carousel3D", &props), props);
    }

    #[test]
    fn normalize_document_value_rejects_non_object_root() {
        let err = normalize_document_value(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, DocumentError::NotAnObject { found: "array" }));
    }

    #[test]
    fn dispatch_document_value_uses_options() {
        let input = json!({
            "components": [
                {"id": "p", "type": "PressLogos", "props": {"logos": ["/a.png"]}},
                {"id": "u", "type": "Mystery", "props": {}}
            ]
        });
        let options = DispatchOptions {
            fallback_image: "https://img.test/x.png".into(),
            replace_relative_images: true,
        };
        let result = dispatch_document_value(&input, options).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["blocks"][0]["props"]["logos"][0]["src"], "https://img.test/x.png");
        assert_eq!(value["blocks"][1]["type"], "placeholder");
        assert_eq!(value["unknownTypes"], json!(["Mystery"]));
    }

    #[test]
    fn audit_types_value_sorts_and_dedupes() {
        let descriptors = json!([
            {"type": "Zeta"},
            {"type": "Hero"},
            {"type": "Alpha"},
            {"type": "Zeta"}
        ]);
        assert_eq!(audit_types_value(&descriptors).unwrap(), vec!["Alpha", "Zeta"]);
        assert!(audit_types_value(&Value::Null).unwrap().is_empty());
        assert!(audit_types_value(&json!("Hero")).is_err());
    }
}
