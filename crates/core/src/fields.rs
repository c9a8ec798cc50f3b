//! Alias resolution over untyped props.
//!
//! Every normalization rule receives a [`Fields`] view of its raw props and reads
//! values through it, naming the acceptable keys in priority order:
//!
//! ```
//! use serde_json::json;
//! use sitegen_core::fields::Fields;
//!
//! let props = json!({"heading": "Welcome", "title": null});
//! let fields = Fields::new(&props);
//! assert_eq!(fields.text(&["title", "heading"], "Your headline"), "Welcome");
//! assert_eq!(fields.text(&["subtitle", "subheading"], ""), "");
//! ```

use serde_json::{Map, Value};

use crate::canonical::Image;
use crate::coerce;

/// Returns the first alias whose value is present and not `null`, or `fallback`.
///
/// ```
/// use serde_json::{json, Value};
/// use sitegen_core::fields::pick;
///
/// let props = json!({"title": "A", "heading": "B"});
/// assert_eq!(pick(&props, &["title", "heading"], &Value::Null), "A");
/// assert_eq!(pick(&props, &["subtitle"], &json!("none")), "none");
/// ```
pub fn pick<'a>(props: &'a Value, aliases: &[&str], fallback: &'a Value) -> &'a Value {
    Fields::new(props).pick(aliases).unwrap_or(fallback)
}

/// Read-only accessor over one props object.
///
/// Non-object props behave like an empty object.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    /// Wraps a raw props value.
    pub fn new(props: &'a Value) -> Self {
        Self {
            map: props.as_object(),
        }
    }

    /// Returns true when the underlying props value is a JSON object.
    pub fn is_object(&self) -> bool {
        self.map.is_some()
    }

    /// Returns a single field if it is present and not `null`.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map?.get(key).filter(|v| !v.is_null())
    }

    /// Returns true if the field is present and not `null`.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// First present, non-null value among `aliases`.
    pub fn pick(&self, aliases: &[&str]) -> Option<&'a Value> {
        aliases.iter().find_map(|key| self.get(key))
    }

    /// First alias whose value converts with `convert`.
    ///
    /// A value of the wrong shape is treated as absent, so the next alias is tried.
    pub fn pick_with<T>(
        &self,
        aliases: &[&str],
        convert: impl Fn(&'a Value) -> Option<T>,
    ) -> Option<T> {
        aliases
            .iter()
            .filter_map(|key| self.get(key))
            .find_map(convert)
    }

    /// Text field with a default.
    pub fn text(&self, aliases: &[&str], default: &str) -> String {
        self.opt_text(aliases)
            .unwrap_or_else(|| default.to_string())
    }

    /// Text field, `None` when no alias holds text.
    pub fn opt_text(&self, aliases: &[&str]) -> Option<String> {
        self.pick_with(aliases, coerce::text)
    }

    /// Boolean flag; only real booleans count, anything else is `false`.
    pub fn flag(&self, aliases: &[&str]) -> bool {
        self.pick_with(aliases, Value::as_bool).unwrap_or(false)
    }

    /// Entries of the first alias that holds an array; empty when none does.
    pub fn list(&self, aliases: &[&str]) -> &'a [Value] {
        self.pick_with(aliases, |v| v.as_array().map(Vec::as_slice))
            .unwrap_or(&[])
    }

    /// Like [`Fields::list`], but a bare string or object is lifted into a
    /// one-item list. Booleans and numbers are treated as absent.
    pub fn list_or_single(&self, aliases: &[&str]) -> Vec<&'a Value> {
        self.pick_with(aliases, |v| match v {
            Value::Array(items) => Some(items.iter().collect()),
            Value::String(_) | Value::Object(_) => Some(vec![v]),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// Images of the first alias holding an array or a single usable image.
    ///
    /// A bare string or object without a usable source counts as absent, so the
    /// next alias is tried. Array entries are deduplicated by source.
    pub fn images(&self, aliases: &[&str]) -> Vec<Image> {
        self.pick_with(aliases, |v| match v {
            Value::Array(items) => Some(coerce::image_set(items)),
            other => coerce::image(other).map(|image| vec![image]),
        })
        .unwrap_or_default()
    }

    /// Returns true if any alias holds an array.
    pub fn has_list(&self, aliases: &[&str]) -> bool {
        self.pick_with(aliases, Value::as_array).is_some()
    }
}
