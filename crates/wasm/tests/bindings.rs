#![cfg(target_arch = "wasm32")]

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sitegen_wasm::{audit_types, component_types, dispatch_document, normalize, normalize_document};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DispatchResult {
    blocks: Vec<Value>,
    unknown_types: Vec<String>,
}

fn js(value: &Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .expect("serialize input")
}

#[wasm_bindgen_test]
fn normalize_hours_splits_time_ranges() {
    let props = js(&json!({"days": [{"day": "Mon", "time": "9:00 - 17:00"}]}));
    let result = normalize("Hours", props).expect("normalize should succeed");
    let result: Value = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert_eq!(result["items"][0]["day"], "Mon");
    assert_eq!(result["items"][0]["open"], "9:00");
    assert_eq!(result["items"][0]["close"], "17:00");
}

#[wasm_bindgen_test]
fn normalize_accepts_undefined_props() {
    let result = normalize("Footer", JsValue::UNDEFINED).expect("normalize should succeed");
    let result: Value = serde_wasm_bindgen::from_value(result).expect("deserialize result");
    assert_eq!(result["links"], json!([]));
}

#[wasm_bindgen_test]
fn normalize_document_keeps_order() {
    let input = js(&json!({
        "websiteName": "Bistro",
        "components": [
            {"id": "h", "type": "Header", "props": {}},
            {"id": "x", "type": "Mystery", "props": {"a": 1}}
        ]
    }));
    let result = normalize_document(input).expect("normalize should succeed");
    let result: Value = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert_eq!(result["site"]["title"], "Bistro");
    assert_eq!(result["components"][0]["id"], "h");
    assert_eq!(result["components"][1]["props"], json!({"a": 1}));
}

#[wasm_bindgen_test]
fn normalize_document_rejects_bad_components() {
    let input = js(&json!({"components": "Header"}));
    assert!(normalize_document(input).is_err());
}

#[wasm_bindgen_test]
fn dispatch_document_renders_placeholders() {
    let input = js(&json!({
        "components": [
            {"id": "a", "type": "Carousel3D", "props": {}},
            {"id": "b", "type": "Divider", "props": {"size": "lg"}}
        ]
    }));
    let result = dispatch_document(input, JsValue::NULL).expect("dispatch should succeed");
    let result: DispatchResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert_eq!(result.blocks.len(), 2);
    assert_eq!(result.blocks[0]["type"], "placeholder");
    assert_eq!(result.blocks[0]["message"], "Unknown component type: Carousel3D");
    assert_eq!(result.blocks[1]["layout"], "bare");
    assert_eq!(result.unknown_types, vec!["Carousel3D"]);
}

#[wasm_bindgen_test]
fn audit_types_lists_unknown_tags() {
    let descriptors = js(&json!([{"type": "Hero"}, {"type": "Ribbon"}]));
    let result = audit_types(descriptors).expect("audit should succeed");
    let result: Vec<String> = serde_wasm_bindgen::from_value(result).expect("deserialize result");
    assert_eq!(result, vec!["Ribbon"]);
}

#[wasm_bindgen_test]
fn component_types_lists_catalog() {
    let types = component_types();
    assert_eq!(types.length(), 47);
    assert_eq!(types.get(0).as_string().as_deref(), Some("Header"));
}
