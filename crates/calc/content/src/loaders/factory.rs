//! Content factory for building calculator inputs from data files.

use std::path::{Path, PathBuf};

use alloy_calc_core::{AlloyCatalog, CalculatorConfig, MaterialIndex};

use crate::loaders::{ConfigLoader, LoadResult, MaterialLoader, RecipeLoader};

const EMBEDDED_ALLOYS: &str = include_str!("../../data/alloys.ron");
const EMBEDDED_MATERIALS: &str = include_str!("../../data/materials.ron");
const EMBEDDED_CONFIG: &str = include_str!("../../data/config.toml");

/// Content factory that loads all calculator content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── alloys.ron
/// └── materials.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load calculator configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CalculatorConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load alloy recipes from `alloys.ron`.
    pub fn load_recipes(&self) -> LoadResult<AlloyCatalog> {
        RecipeLoader::load(&self.data_dir.join("alloys.ron"))
    }

    /// Load material sources from `materials.ron`.
    pub fn load_materials(&self) -> LoadResult<MaterialIndex> {
        MaterialLoader::load(&self.data_dir.join("materials.ron"))
    }

    /// Vanilla alloy recipes bundled with this crate.
    pub fn embedded_recipes() -> LoadResult<AlloyCatalog> {
        RecipeLoader::parse(EMBEDDED_ALLOYS)
    }

    /// Vanilla material sources bundled with this crate.
    pub fn embedded_materials() -> LoadResult<MaterialIndex> {
        MaterialLoader::parse(EMBEDDED_MATERIALS)
    }

    /// Default configuration bundled with this crate.
    pub fn embedded_config() -> LoadResult<CalculatorConfig> {
        ConfigLoader::parse(EMBEDDED_CONFIG)
    }
}
