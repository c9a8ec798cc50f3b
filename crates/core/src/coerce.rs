//! Shared coercions used by the per-type rules.

use std::collections::HashSet;
use std::hash::Hash;

use serde_json::Value;

use crate::canonical::{Image, Link};
use crate::fields::Fields;

/// Keys that may carry an image URL inside an image object, in priority order.
const IMAGE_SRC_KEYS: &[&str] = &["src", "image", "url", "href"];
/// Keys that may carry alt text inside an image object, in priority order.
const IMAGE_ALT_KEYS: &[&str] = &["alt", "title", "caption"];
/// Keys that may carry the visible label of a link or call to action.
const LINK_LABEL_KEYS: &[&str] = &["label", "text", "title", "name"];
/// Keys that may carry the target of a link or call to action.
const LINK_HREF_KEYS: &[&str] = &["href", "url", "link"];
/// Keys tried when a string-list entry is an object.
const STRING_ITEM_KEYS: &[&str] = &["label", "name", "title", "text"];

/// Default link target.
pub const DEFAULT_HREF: &str = "#";

/// Display text: strings as-is, numbers in their JSON spelling.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Formats a price for display.
///
/// Numbers become `"$"` plus two decimals, strings pass through unchanged,
/// anything else (including absence) becomes an empty string.
///
/// ```
/// use serde_json::json;
/// use sitegen_core::coerce::price;
///
/// assert_eq!(price(Some(&json!(12.5))), "$12.50");
/// assert_eq!(price(Some(&json!("Market"))), "Market");
/// assert_eq!(price(None), "");
/// ```
pub fn price(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(format_dollars).unwrap_or_default(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// `"$" + value.toFixed(2)`.
fn format_dollars(value: f64) -> String {
    format!("${}", to_fixed_2(value))
}

/// JavaScript's `Number.prototype.toFixed(2)` for finite values.
///
/// Rounds the exact binary value, with exact ties going up. Magnitudes of
/// `1e21` and above use the exponent form of `Number.prototype.toString`.
fn to_fixed_2(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude >= 1e21 {
        return format!("{}{}", sign, format!("{:e}", magnitude).replace('e', "e+"));
    }

    // Exact for every f64 >= 2^-8; smaller values are below half a cent anyway.
    let exact = format!("{:.60}", magnitude);
    let Some((whole, fraction)) = exact.split_once('.') else {
        return format!("{}{}.00", sign, exact);
    };
    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(2))
        .map(|b| b - b'0')
        .collect();
    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - 2;
    let render = |part: &[u8]| -> String { part.iter().map(|d| char::from(b'0' + d)).collect() };
    format!("{}{}.{}", sign, render(&digits[..split]), render(&digits[split..]))
}

/// Adds one unit in the last place to a decimal digit string.
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

/// Lifts a bare URL or an image-like object into an [`Image`].
///
/// Returns `None` when no usable source can be found.
pub fn image(value: &Value) -> Option<Image> {
    match value {
        Value::String(src) if !src.trim().is_empty() => Some(Image {
            src: src.clone(),
            alt: String::new(),
        }),
        Value::Object(_) => {
            let fields = Fields::new(value);
            let src = fields.pick_with(IMAGE_SRC_KEYS, |v| {
                v.as_str().filter(|s| !s.trim().is_empty()).map(str::to_string)
            })?;
            let alt = fields
                .pick_with(IMAGE_ALT_KEYS, |v| v.as_str().map(str::to_string))
                .unwrap_or_else(|| basename(&src).to_string());
            Some(Image { src, alt })
        }
        _ => None,
    }
}

/// Last path segment of a URL (`"https://x/a/b.jpg"` → `"b.jpg"`).
fn basename(src: &str) -> &str {
    src.rsplit('/').next().unwrap_or_default()
}

/// Lifts a bare label or a link-like object into a [`Link`].
///
/// A bare string becomes `{label, href: "#"}`. Objects need a label or a target;
/// an empty or missing target becomes `"#"`.
pub fn link(value: &Value) -> Option<Link> {
    match value {
        Value::String(label) if !label.is_empty() => Some(Link {
            label: label.clone(),
            href: DEFAULT_HREF.to_string(),
        }),
        Value::Object(_) => {
            let fields = Fields::new(value);
            let label = fields.opt_text(LINK_LABEL_KEYS);
            let href = fields.opt_text(LINK_HREF_KEYS);
            if label.is_none() && href.is_none() {
                return None;
            }
            Some(Link {
                label: label.unwrap_or_default(),
                href: href
                    .filter(|h| !h.is_empty())
                    .unwrap_or_else(|| DEFAULT_HREF.to_string()),
            })
        }
        _ => None,
    }
}

/// Coerces every entry with `convert`, dropping the ones that don't fit.
pub fn list_of<'a, T>(
    items: impl IntoIterator<Item = &'a Value>,
    convert: impl Fn(&'a Value) -> Option<T>,
) -> Vec<T> {
    items.into_iter().filter_map(convert).collect()
}

/// Objects of a list, each handed to `rule`; non-object entries are dropped.
pub fn objects<'a, T>(
    items: impl IntoIterator<Item = &'a Value>,
    rule: impl Fn(&Fields<'a>) -> T,
) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.is_object())
        .map(|item| rule(&Fields::new(item)))
        .collect()
}

/// Entries of a string list: strings, numbers, or objects carrying a label.
pub fn string_list<'a>(items: impl IntoIterator<Item = &'a Value>) -> Vec<String> {
    list_of(items, |item| match item {
        Value::Object(_) => Fields::new(item).opt_text(STRING_ITEM_KEYS),
        other => text(other),
    })
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect()
}

/// Stable de-duplication: keeps the first item for each key, preserving order.
pub fn dedupe_by_key<T, K: Eq + Hash>(items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Coerces an image list and drops repeated sources.
pub fn image_set<'a>(items: impl IntoIterator<Item = &'a Value>) -> Vec<Image> {
    dedupe_by_key(list_of(items, image), |img| img.src.clone())
}

/// Splits an opening-hours range such as `"6pm-10pm"` or `"6pm — 10pm"`.
///
/// ```
/// use sitegen_core::coerce::split_time_range;
///
/// assert_eq!(split_time_range(" 6pm – 10pm "), ("6pm".to_string(), "10pm".to_string()));
/// assert_eq!(split_time_range("Closed"), ("Closed".to_string(), String::new()));
/// ```
pub fn split_time_range(range: &str) -> (String, String) {
    let mut parts = range.trim().split(['-', '—', '–']).map(str::trim);
    let open = parts.next().unwrap_or_default().to_string();
    let close = parts.next().unwrap_or_default().to_string();
    (open, close)
}
