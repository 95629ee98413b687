//! Embedding-facing exports for the gallery component catalog.
//!
//! The root crate wires the catalog types, the built-in data source, and the
//! per-session state container together so a GUI shell can embed the catalog
//! without digging through the member crates. The shell constructs its own
//! [`CatalogSession`] around a [`CatalogSource`], binds a text input to the
//! session's search text, and re-renders from [`CatalogSession::grouped`]
//! whenever a [`CatalogEvent`] arrives.

pub mod demo;
pub mod logging;
pub mod session;

pub use gallery_builtin::BuiltinCatalog;
pub use gallery_catalog::{
    CatalogSource, Category, ComponentDescriptor, ComponentId, FetchError, filter_by_name,
    group_by_category, grouped_catalog,
};

pub use demo::{DemoKind, DemoRegistry, DemoRegistryError};
pub use session::{CatalogEvent, CatalogSession, LoadError, SessionConfig};
