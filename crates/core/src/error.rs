use thiserror::Error;

/// Errors raised while reading the top-level document envelope.
///
/// Everything below the envelope (descriptor entries, props) is handled by
/// default substitution and never surfaces as an error.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document text is not valid JSON.
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The document root is not a JSON object.
    #[error("Document root must be an object, found {found}")]
    NotAnObject {
        /// JSON type name of the value that was found
        found: &'static str,
    },
    /// `components` is present but is not a list.
    #[error("Document `components` must be a list, found {found}")]
    ComponentsNotAList {
        /// JSON type name of the value that was found
        found: &'static str,
    },
}

/// Errors raised while registering extension normalization rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A rule already exists for this tag (built-in or previously registered).
    #[error("Duplicate normalization rule for component type `{tag}`")]
    DuplicateRule {
        /// Component type tag
        tag: String,
    },
    /// Extension rules need a non-empty tag.
    #[error("Component type tag must not be empty")]
    EmptyTag,
}

/// Returns the JSON type name used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Non-fatal findings that never prevent rendering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Warning {
    /// Component type with no renderer; the component renders as a placeholder.
    #[serde(rename_all = "camelCase")]
    UnknownComponent {
        /// Descriptor id
        id: String,
        /// Component type tag
        component_type: String,
    },
    /// Two or more descriptors share one id.
    #[serde(rename_all = "camelCase")]
    DuplicateId {
        /// The repeated id
        id: String,
        /// Position of the later occurrence in the component list
        index: usize,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::UnknownComponent { id, component_type } => {
                write!(f, "Unknown component type `{}` ({})", component_type, id)
            }
            Warning::DuplicateId { id, index } => {
                write!(f, "Duplicate component id `{}` at position {}", id, index)
            }
        }
    }
}

/// Collection of non-fatal diagnostics for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostics {
    /// Warnings in the order they were found
    pub warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Create an empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// Merge another collection into this one, keeping order
    pub fn extend(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get total count of all diagnostics
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}
