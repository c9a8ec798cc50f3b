#![deny(missing_docs)]
//! sitegen render engine: type coverage registry and render dispatch.
//!
//! Takes normalized components from `sitegen-core` and turns each one into a
//! render block, or a visible placeholder when no renderer exists for its type.

/// Render dispatch (render blocks, placeholders, image policy).
pub mod dispatch;
/// Type coverage registry and its configuration.
pub mod registry;

pub use dispatch::{
    DispatchOptions, DispatchResult, Dispatcher, FALLBACK_IMAGE, RenderBlock, dispatch,
};
pub use registry::{
    ComponentDefinition, CoverageRegistry, Layout, RegistryConfig, audit_types,
    default_site_registry,
};
