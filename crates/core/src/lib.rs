#![deny(missing_docs)]
//! sitegen core: component descriptors, alias resolution and per-type props
//! normalization.
//!
//! A generated site arrives as a flat list of `{id, type, props}` descriptors whose
//! props drift in shape between generator versions. This crate maps each
//! `(type, props)` pair to a canonical, renderer-ready record without ever failing.

/// Typed canonical props records.
pub mod canonical;
/// Shared coercions (text, price, image, link, lists).
pub mod coerce;
/// Component descriptors, documents and site metadata.
pub mod document;
/// Core error and diagnostic types.
pub mod error;
/// Alias resolution over untyped props.
pub mod fields;
/// The closed catalog of component kinds.
pub mod kind;
/// The normalization engine.
pub mod normalize;
/// Per-kind normalization rules.
pub mod rules;

pub use canonical::{CanonicalProps, Cta, Image, Link};
pub use document::{ComponentDescriptor, Document, SiteMeta};
pub use error::{CatalogError, Diagnostics, DocumentError, Warning};
pub use fields::{Fields, pick};
pub use kind::ComponentKind;
pub use normalize::{
    ExtensionRule, NormalizedComponent, NormalizedDocument, Normalizer, normalize,
};
