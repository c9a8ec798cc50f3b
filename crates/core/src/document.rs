use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::coerce;
use crate::error::{Diagnostics, DocumentError, Warning, json_type_name};

/// Title used when a document names no site.
pub const DEFAULT_SITE_TITLE: &str = "Generated Site";

/// One `{id, type, props}` entry of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDescriptor {
    /// Opaque identifier, expected to be unique within a document
    pub id: String,
    /// Type tag; may name a kind this crate has never heard of
    #[serde(rename = "type")]
    pub component_type: String,
    /// Generator metadata, carried through unchanged
    pub tags: Vec<String>,
    /// Raw, untyped props
    pub props: Value,
}

impl ComponentDescriptor {
    /// Creates a descriptor with no tags.
    pub fn new(id: impl Into<String>, component_type: impl Into<String>, props: Value) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            tags: Vec::new(),
            props,
        }
    }

    /// Reads the descriptor at `index` of a component list.
    ///
    /// A missing id becomes `c<index + 1>`, missing props become `{}` and missing
    /// tags become `[]`. Entries that are not objects are kept with an empty type
    /// so they still take their slot in the page.
    pub fn from_value(index: usize, value: &Value) -> Self {
        let entry = value.as_object();
        let field = |key: &str| entry.and_then(|map| map.get(key)).filter(|v| !v.is_null());

        let id = field("id")
            .and_then(coerce::text)
            .unwrap_or_else(|| format!("c{}", index + 1));
        let component_type = field("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let tags = field("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let props = field("props")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        Self {
            id,
            component_type,
            tags,
            props,
        }
    }
}

/// Site-level metadata derived from the document envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeta {
    /// Display title of the site
    pub title: String,
    /// Placeholder domain built from the title, e.g. `"luigisbistro.com"`
    pub domain_hint: String,
}

impl SiteMeta {
    /// Reads the title from `websiteName`, `metadata.title` or `business_name`.
    pub fn from_envelope(root: &Value) -> Self {
        let non_empty = |value: Option<&Value>| {
            value
                .and_then(coerce::text)
                .filter(|title| !title.is_empty())
        };
        let title = non_empty(root.get("websiteName"))
            .or_else(|| non_empty(root.get("metadata").and_then(|m| m.get("title"))))
            .or_else(|| non_empty(root.get("business_name")))
            .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string());
        Self::from_title(title)
    }

    /// Builds metadata for a known title.
    pub fn from_title(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            domain_hint: domain_hint(&title),
            title,
        }
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self::from_title(DEFAULT_SITE_TITLE)
    }
}

/// Lowercased ASCII alphanumerics of the title plus `.com`, or `site.com`.
///
/// ```
/// use sitegen_core::document::domain_hint;
///
/// assert_eq!(domain_hint("Luigi's Bistro"), "luigisbistro.com");
/// assert_eq!(domain_hint("!!!"), "site.com");
/// ```
pub fn domain_hint(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    if slug.is_empty() {
        "site.com".to_string()
    } else {
        format!("{}.com", slug)
    }
}

/// One immutable snapshot of a generated site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Site metadata
    pub site: SiteMeta,
    /// Descriptors in page order
    pub components: Vec<ComponentDescriptor>,
}

impl Document {
    /// Creates a document from descriptors with default metadata.
    pub fn new(components: Vec<ComponentDescriptor>) -> Self {
        Self {
            site: SiteMeta::default(),
            components,
        }
    }

    /// Reads a parsed JSON document.
    ///
    /// A missing or `null` `components` is an empty document.
    pub fn from_value(root: &Value) -> Result<Self, DocumentError> {
        if !root.is_object() {
            return Err(DocumentError::NotAnObject {
                found: json_type_name(root),
            });
        }
        let components = match root.get("components") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| ComponentDescriptor::from_value(index, entry))
                .collect(),
            Some(other) => {
                return Err(DocumentError::ComponentsNotAList {
                    found: json_type_name(other),
                });
            }
        };
        Ok(Self {
            site: SiteMeta::from_envelope(root),
            components,
        })
    }

    /// Parses document text.
    pub fn from_json_str(source: &str) -> Result<Self, DocumentError> {
        let root: Value = serde_json::from_str(source)?;
        Self::from_value(&root)
    }

    /// Reports every repeated id after its first occurrence.
    pub fn check_ids(&self) -> Diagnostics {
        let mut seen = HashSet::new();
        let mut diagnostics = Diagnostics::new();
        for (index, component) in self.components.iter().enumerate() {
            if !seen.insert(component.id.as_str()) {
                log::warn!(
                    "Duplicate component id `{}` at position {}",
                    component.id,
                    index
                );
                diagnostics.add_warning(Warning::DuplicateId {
                    id: component.id.clone(),
                    index,
                });
            }
        }
        diagnostics
    }
}
