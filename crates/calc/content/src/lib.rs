//! Data-driven content for the alloy calculator.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Alloy recipe catalogs (RON)
//! - Smeltable material sources, fuels and containers (RON)
//! - Calculator configuration (TOML)
//!
//! The vanilla catalogs are embedded so a host can run without a data
//! directory. All loaders use alloy-calc-core types directly with serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MaterialCatalog, MaterialLoader, RecipeLoader,
};
