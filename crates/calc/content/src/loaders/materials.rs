//! Material source loader.

use std::path::Path;

use alloy_calc_core::{MaterialIndex, MaterialSource};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Material catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialCatalog {
    pub sources: Vec<MaterialSource>,
}

/// Loader for material sources from RON files.
pub struct MaterialLoader;

impl MaterialLoader {
    /// Load material sources from a RON file and index them.
    pub fn load(path: &Path) -> LoadResult<MaterialIndex> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse material sources from RON text and index them.
    pub fn parse(content: &str) -> LoadResult<MaterialIndex> {
        let catalog: MaterialCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse material catalog RON: {}", e))?;

        Ok(MaterialIndex::new(catalog.sources))
    }
}
