//! Data-driven attribute content.
//!
//! This crate loads everything a host defines outside of code:
//! - Catalog configuration (data-driven via TOML)
//! - Extra attribute kinds (data-driven via TOML)
//! - Entity attribute profiles with overrides, modifiers and a tool (data-driven via RON)
//!
//! All loaders use attribute-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AttributeSpec, CatalogLoader, ConfigLoader, ContentFactory, EntityProfile, ProfileLoader,
    ProfileModifier,
};
