//! NAPI-exposed data structures.

use napi_derive::napi;
use serde_json::Value as JsonValue;
use sitegen_render::{DispatchOptions, RegistryConfig};

/// Options accepted by dispatch entry points and the renderer constructor.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct DispatchConfig {
    /// Image used in place of logos and award icons that are not absolute URLs.
    pub fallback_image: Option<String>,
    /// Replace non-`http(s)` logo and award icon sources. Defaults to true.
    pub replace_relative_images: Option<bool>,
    /// Registry configuration (JSON, `{components: [{name, layout}]}`).
    /// Defaults to the built-in catalog.
    pub registry: Option<JsonValue>,
}

impl DispatchConfig {
    /// Dispatch options with unset fields taken from the defaults.
    pub fn dispatch_options(&self) -> DispatchOptions {
        let defaults = DispatchOptions::default();
        DispatchOptions {
            fallback_image: self
                .fallback_image
                .clone()
                .unwrap_or(defaults.fallback_image),
            replace_relative_images: self
                .replace_relative_images
                .unwrap_or(defaults.replace_relative_images),
        }
    }

    /// Custom registry configuration, if one was supplied.
    pub fn registry_config(&self) -> Result<Option<RegistryConfig>, serde_json::Error> {
        self.registry
            .clone()
            .filter(|value| !value.is_null())
            .map(serde_json::from_value)
            .transpose()
    }
}

/// A single document to process in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Document identifier (typically the site or page id).
    pub id: String,
    /// The document envelope `{components: [...], ...}`.
    pub document: JsonValue,
}

/// Result for a single document in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Document identifier matching the input.
    pub id: String,
    /// Processed document (present on success).
    pub result: Option<JsonValue>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch processing.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total number of documents submitted.
    pub total: u32,
    /// Number of documents processed successfully.
    pub succeeded: u32,
    /// Number of documents that failed.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to number of CPU cores.
    pub max_threads: Option<u32>,
    /// Whether to continue processing after an error. Defaults to true.
    pub continue_on_error: Option<bool>,
}

/// Result of batch processing containing all results and statistics.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results, in input order.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}
