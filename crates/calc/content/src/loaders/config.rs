//! Calculator configuration loader.

use std::path::Path;

use alloy_calc_core::CalculatorConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for calculator configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`CalculatorConfig::default`].
    pub fn load(path: &Path) -> LoadResult<CalculatorConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<CalculatorConfig> {
        let config: CalculatorConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("default_target_units = 250").unwrap();

        assert_eq!(config.default_target_units, 250);
        assert_eq!(config.units_per_item, CalculatorConfig::DEFAULT_UNITS_PER_ITEM);
        assert!(config.clamp_edits);
    }

    #[test]
    fn zero_units_per_item_is_rejected() {
        let err = ConfigLoader::parse("units_per_item = 0").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
