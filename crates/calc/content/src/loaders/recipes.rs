//! Alloy recipe catalog loader.

use std::path::Path;

use alloy_calc_core::AlloyCatalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for alloy recipe catalogs from RON files.
pub struct RecipeLoader;

impl RecipeLoader {
    /// Load an alloy catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<AlloyCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an alloy catalog from RON text.
    ///
    /// Ingredients with a ratio outside `0.0..=1.0` are kept (their bounds are
    /// clamped when channels are built) but logged, since they usually point
    /// at a percentage typed where a fraction was expected.
    pub fn parse(content: &str) -> LoadResult<AlloyCatalog> {
        let catalog: AlloyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse alloy catalog RON: {}", e))?;

        for recipe in &catalog.alloys {
            for ingredient in &recipe.ingredients {
                let in_range = |ratio: f64| (0.0..=1.0).contains(&ratio);
                if !in_range(ingredient.min_ratio) || !in_range(ingredient.max_ratio) {
                    tracing::warn!(
                        recipe = %recipe.code,
                        ingredient = %ingredient.code,
                        min_ratio = ingredient.min_ratio,
                        max_ratio = ingredient.max_ratio,
                        "ingredient ratio outside 0..1"
                    );
                }
            }
        }

        tracing::debug!(alloys = catalog.len(), "alloy catalog loaded");
        Ok(catalog)
    }
}
