//! Type definitions for render dispatch.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sitegen_core::{CanonicalProps, Diagnostics, SiteMeta};

use crate::registry::Layout;

/// Image shown in place of logos and award icons that are not absolute URLs.
pub const FALLBACK_IMAGE: &str = "https://picsum.photos/seed/placeholder/1200/600";

/// Options controlling render dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOptions {
    /// Image used when a logo or award icon cannot be displayed.
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,
    /// Replace non-`http(s)` logo and award icon sources with `fallback_image`.
    #[serde(default = "default_replace_relative_images")]
    pub replace_relative_images: bool,
}

fn default_fallback_image() -> String {
    FALLBACK_IMAGE.to_string()
}

fn default_replace_relative_images() -> bool {
    true
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            fallback_image: default_fallback_image(),
            replace_relative_images: default_replace_relative_images(),
        }
    }
}

/// One entry of the rendered page, in document order.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderBlock {
    /// A component with a registered renderer.
    Component {
        /// Descriptor id.
        id: String,
        /// Renderer name (the component type tag).
        name: String,
        /// Page-level wrapping.
        layout: Layout,
        /// Canonical props handed to the renderer.
        props: CanonicalProps,
    },

    /// Visible stand-in for a type with no renderer.
    #[serde(rename_all = "camelCase")]
    Placeholder {
        /// Descriptor id.
        id: String,
        /// The unrenderable type tag.
        component_type: String,
        /// Message shown in place of the component.
        message: String,
    },
}

impl RenderBlock {
    /// Creates a placeholder block for an unrenderable type.
    pub fn placeholder(id: impl Into<String>, component_type: impl Into<String>) -> Self {
        let component_type = component_type.into();
        RenderBlock::Placeholder {
            id: id.into(),
            message: format!("Unknown component type: {}", component_type),
            component_type,
        }
    }

    /// Descriptor id of this block.
    pub fn id(&self) -> &str {
        match self {
            RenderBlock::Component { id, .. } | RenderBlock::Placeholder { id, .. } => id,
        }
    }

    /// Returns true if this is a placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, RenderBlock::Placeholder { .. })
    }
}

/// Result of dispatching one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    /// Site metadata.
    pub site: SiteMeta,
    /// Render blocks in document order, one per descriptor.
    pub blocks: Vec<RenderBlock>,
    /// Distinct type tags with no renderer.
    pub unknown_types: BTreeSet<String>,
    /// Non-fatal findings (unknown types, duplicate ids).
    pub diagnostics: Diagnostics,
}
