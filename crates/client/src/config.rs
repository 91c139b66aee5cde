//! Headless client configuration.
use std::env;
use std::path::PathBuf;

/// Where content comes from and what the session starts with.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub catalog_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub recipe: Option<String>,
    pub target_units: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ALLOY_CATALOG` - RON alloy catalog (default: embedded vanilla alloys)
    /// - `ALLOY_CONFIG` - TOML calculator config (default: embedded defaults)
    /// - `ALLOY_RECIPE` - Recipe code or display name to select (default: first)
    /// - `ALLOY_TARGET_UNITS` - Target melt size in units (default: from config)
    pub fn from_env() -> Self {
        Self {
            catalog_path: env::var("ALLOY_CATALOG").ok().map(PathBuf::from),
            config_path: env::var("ALLOY_CONFIG").ok().map(PathBuf::from),
            recipe: env::var("ALLOY_RECIPE").ok(),
            target_units: env::var("ALLOY_TARGET_UNITS").ok(),
        }
    }
}

/// A slider edit given on the command line as `index=percent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edit {
    pub index: usize,
    pub percent: u32,
}

impl std::str::FromStr for Edit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, percent) = s
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected index=percent, got {s:?}"))?;
        Ok(Self {
            index: index
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("bad channel index in {s:?}: {e}"))?,
            percent: percent
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("bad percent in {s:?}: {e}"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edits() {
        assert_eq!(
            "1=62".parse::<Edit>().unwrap(),
            Edit {
                index: 1,
                percent: 62
            }
        );
        assert!("62".parse::<Edit>().is_err());
        assert!("a=1".parse::<Edit>().is_err());
        assert!("0=-4".parse::<Edit>().is_err());
    }
}
