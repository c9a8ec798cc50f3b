//! The normalization engine: built-in rules, extension rules and pass-through.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::canonical::CanonicalProps;
use crate::document::{ComponentDescriptor, Document, SiteMeta};
use crate::error::{CatalogError, Diagnostics};
use crate::fields::Fields;
use crate::kind::ComponentKind;
use crate::rules;

/// Rule for a component type outside the built-in catalog.
///
/// The returned value should be a JSON object; anything else is replaced by `{}`.
pub type ExtensionRule = fn(&Fields<'_>) -> Value;

/// Normalizes props with the built-in rules plus any registered extensions.
#[derive(Clone, Default)]
pub struct Normalizer {
    extensions: HashMap<String, ExtensionRule>,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.extensions.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("Normalizer").field("extensions", &tags).finish()
    }
}

impl Normalizer {
    /// Creates a normalizer with only the built-in rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule for a new component type.
    ///
    /// Fails when the tag is empty or already has a rule, built-in or registered.
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        rule: ExtensionRule,
    ) -> Result<(), CatalogError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(CatalogError::EmptyTag);
        }
        if self.has_rule(&tag) {
            return Err(CatalogError::DuplicateRule { tag });
        }
        self.extensions.insert(tag, rule);
        Ok(())
    }

    /// Returns true if `tag` has a built-in or registered rule.
    pub fn has_rule(&self, tag: &str) -> bool {
        ComponentKind::from_tag(tag).is_some() || self.extensions.contains_key(tag)
    }

    /// Maps raw props to canonical props. Total: never fails, always an object.
    pub fn normalize(&self, tag: &str, props: &Value) -> CanonicalProps {
        let fields = Fields::new(props);
        if let Some(kind) = ComponentKind::from_tag(tag) {
            return rules::apply(kind, &fields);
        }
        if let Some(rule) = self.extensions.get(tag) {
            return match rule(&fields) {
                Value::Object(map) => CanonicalProps::Extension(map),
                other => {
                    log::debug!(
                        "Extension rule for `{}` returned a non-object ({}), using {{}}",
                        tag,
                        crate::error::json_type_name(&other)
                    );
                    CanonicalProps::Extension(Map::new())
                }
            };
        }
        CanonicalProps::Passthrough(props.as_object().cloned().unwrap_or_default())
    }

    /// Normalizes one descriptor, keeping its id, type and tags.
    pub fn normalize_component(&self, descriptor: &ComponentDescriptor) -> NormalizedComponent {
        let props = self.normalize(&descriptor.component_type, &descriptor.props);
        if matches!(props, CanonicalProps::Passthrough(_)) {
            log::debug!(
                "No normalization rule for `{}` ({}), props passed through",
                descriptor.component_type,
                descriptor.id
            );
        }
        NormalizedComponent {
            id: descriptor.id.clone(),
            component_type: descriptor.component_type.clone(),
            tags: descriptor.tags.clone(),
            props,
        }
    }

    /// Normalizes every descriptor in document order.
    pub fn normalize_document(&self, document: &Document) -> NormalizedDocument {
        NormalizedDocument {
            site: document.site.clone(),
            components: document
                .components
                .iter()
                .map(|descriptor| self.normalize_component(descriptor))
                .collect(),
            diagnostics: document.check_ids(),
        }
    }
}

/// Normalizes props with the built-in rules only.
///
/// ```
/// use serde_json::json;
/// use sitegen_core::normalize;
///
/// let props = normalize("Hero", &json!({"heading": "Welcome"})).to_value();
/// assert_eq!(props["title"], "Welcome");
///
/// let props = normalize("TotallyNew", &json!({"x": 1})).to_value();
/// assert_eq!(props, json!({"x": 1}));
/// ```
pub fn normalize(tag: &str, props: &Value) -> CanonicalProps {
    Normalizer::new().normalize(tag, props)
}

/// A descriptor with canonical props.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedComponent {
    /// Descriptor id
    pub id: String,
    /// Descriptor type tag
    #[serde(rename = "type")]
    pub component_type: String,
    /// Descriptor tags
    pub tags: Vec<String>,
    /// Canonical props
    pub props: CanonicalProps,
}

/// Output of [`Normalizer::normalize_document`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedDocument {
    /// Site metadata
    pub site: SiteMeta,
    /// Components in document order
    pub components: Vec<NormalizedComponent>,
    /// Non-fatal findings
    pub diagnostics: Diagnostics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ribbon(fields: &Fields<'_>) -> Value {
        json!({"text": fields.text(&["text", "label"], "New!")})
    }

    fn broken(_: &Fields<'_>) -> Value {
        json!(["not", "an", "object"])
    }

    #[test]
    fn unknown_tags_pass_through() {
        let props = json!({"anything": [1, 2], "nested": {"a": null}});
        assert_eq!(normalize("TotallyNew", &props).to_value(), props);
        assert_eq!(normalize("TotallyNew", &json!("scalar")).to_value(), json!({}));
    }

    #[test]
    fn registered_extension_rule_runs() {
        let mut normalizer = Normalizer::new();
        normalizer.register("Ribbon", ribbon).unwrap();
        let props = normalizer.normalize("Ribbon", &json!({"label": "Sale"}));
        assert!(matches!(props, CanonicalProps::Extension(_)));
        assert_eq!(props.to_value(), json!({"text": "Sale"}));
    }

    #[test]
    fn extension_non_object_output_becomes_empty() {
        let mut normalizer = Normalizer::new();
        normalizer.register("Broken", broken).unwrap();
        assert_eq!(normalizer.normalize("Broken", &json!({})).to_value(), json!({}));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut normalizer = Normalizer::new();
        assert_eq!(
            normalizer.register("Hero", ribbon),
            Err(CatalogError::DuplicateRule { tag: "Hero".into() })
        );
        normalizer.register("Ribbon", ribbon).unwrap();
        assert_eq!(
            normalizer.register("Ribbon", broken),
            Err(CatalogError::DuplicateRule {
                tag: "Ribbon".into()
            })
        );
        assert_eq!(normalizer.register("", ribbon), Err(CatalogError::EmptyTag));
    }

    #[test]
    fn document_keeps_order_and_reports_duplicates() {
        let document = Document::from_value(&json!({
            "websiteName": "Cafe",
            "components": [
                {"id": "x", "type": "Hero", "props": {"heading": "Hi"}},
                {"id": "x", "type": "Mystery", "props": {"k": 1}},
                {"type": "Footer"}
            ]
        }))
        .unwrap();
        let normalized = Normalizer::new().normalize_document(&document);
        let types: Vec<&str> = normalized
            .components
            .iter()
            .map(|c| c.component_type.as_str())
            .collect();
        assert_eq!(types, vec!["Hero", "Mystery", "Footer"]);
        assert_eq!(normalized.components[2].id, "c3");
        assert_eq!(normalized.diagnostics.count(), 1);
        assert_eq!(normalized.site.domain_hint, "cafe.com");
    }

    #[test]
    fn normalized_component_serializes_with_type_key() {
        let component = Normalizer::new()
            .normalize_component(&ComponentDescriptor::new("d", "Divider", json!({})));
        assert_eq!(
            serde_json::to_value(&component).unwrap(),
            json!({"id": "d", "type": "Divider", "tags": [], "props": {"size": "md"}})
        );
    }
}
