//! Smeltable material sources.
//!
//! The host reports every stack it can show (ores, nuggets, bits, fuels,
//! crucibles). The calculator only lists sources that melt into an ingredient
//! and that some known fuel burns hot enough to melt.

use crate::recipe::{AlloyIngredient, first_code_part};

/// Code prefixes of sources listed next to a channel.
pub const LISTED_SOURCE_PREFIXES: [&str; 2] = ["metalbit", "nugget"];

/// A stack known to the host, reduced to its smelting properties.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialSource {
    pub code: String,
    /// Material code this stack melts into, if it melts at all.
    #[cfg_attr(feature = "serde", serde(default))]
    pub smelts_into: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub melting_point: Option<u32>,
    /// Present on fuels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub burn_temperature: Option<u32>,
    /// Holds a melt (crucible-like cooking container slots).
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_container: bool,
}

impl MaterialSource {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            smelts_into: None,
            melting_point: None,
            burn_temperature: None,
            is_container: false,
        }
    }

    #[must_use]
    pub fn smelting(mut self, into: impl Into<String>, melting_point: u32) -> Self {
        self.smelts_into = Some(into.into());
        self.melting_point = Some(melting_point);
        self
    }

    #[must_use]
    pub fn fuel(mut self, burn_temperature: u32) -> Self {
        self.burn_temperature = Some(burn_temperature);
        self
    }

    #[must_use]
    pub fn container(mut self) -> Self {
        self.is_container = true;
        self
    }

    pub fn is_fuel(&self) -> bool {
        self.burn_temperature.is_some()
    }
}

/// Indexed view over all sources with the hottest fuel precomputed.
#[derive(Clone, Debug, Default)]
pub struct MaterialIndex {
    sources: Vec<MaterialSource>,
    max_fuel_temperature: u32,
}

impl MaterialIndex {
    pub fn new(sources: Vec<MaterialSource>) -> Self {
        let max_fuel_temperature = sources
            .iter()
            .filter_map(|source| source.burn_temperature)
            .max()
            .unwrap_or(0);

        tracing::debug!(
            sources = sources.len(),
            max_fuel_temperature,
            "material index built"
        );

        Self {
            sources,
            max_fuel_temperature,
        }
    }

    pub fn sources(&self) -> &[MaterialSource] {
        &self.sources
    }

    pub fn fuels(&self) -> impl Iterator<Item = &MaterialSource> {
        self.sources.iter().filter(|source| source.is_fuel())
    }

    pub fn containers(&self) -> impl Iterator<Item = &MaterialSource> {
        self.sources.iter().filter(|source| source.is_container)
    }

    /// Hottest burn temperature of any fuel, 0 without fuels.
    pub fn max_fuel_temperature(&self) -> u32 {
        self.max_fuel_temperature
    }

    /// Has a melting point that the hottest fuel reaches.
    pub fn can_smelt(&self, source: &MaterialSource) -> bool {
        source
            .melting_point
            .is_some_and(|point| point <= self.max_fuel_temperature)
    }

    /// Smeltable bits and nuggets that melt into `ingredient`.
    pub fn sources_for(&self, ingredient: &AlloyIngredient) -> Vec<&MaterialSource> {
        self.sources
            .iter()
            .filter(|source| source.smelts_into.as_deref() == Some(ingredient.code.as_str()))
            .filter(|source| self.can_smelt(source))
            .filter(|source| LISTED_SOURCE_PREFIXES.contains(&first_code_part(&source.code)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> MaterialIndex {
        MaterialIndex::new(vec![
            MaterialSource::new("charcoal").fuel(1300),
            MaterialSource::new("firewood").fuel(800),
            MaterialSource::new("crucible-burned").container(),
            MaterialSource::new("nugget-nativecopper").smelting("ingot-copper", 1084),
            MaterialSource::new("metalbit-copper").smelting("ingot-copper", 1084),
            MaterialSource::new("ore-poor-malachite").smelting("ingot-copper", 1084),
            MaterialSource::new("metalbit-iron").smelting("ingot-iron", 1482),
            MaterialSource::new("metalbit-tin").smelting("ingot-tin", 232),
        ])
    }

    #[test]
    fn hottest_fuel_sets_the_limit() {
        let index = index();
        assert_eq!(index.max_fuel_temperature(), 1300);
        assert_eq!(index.fuels().count(), 2);
        assert_eq!(index.containers().count(), 1);
        assert_eq!(MaterialIndex::new(Vec::new()).max_fuel_temperature(), 0);
    }

    #[test]
    fn smeltability_requires_a_hot_enough_fuel() {
        let index = index();
        let iron = &index.sources()[6];
        let tin = &index.sources()[7];
        let charcoal = &index.sources()[0];

        assert!(!index.can_smelt(iron));
        assert!(index.can_smelt(tin));
        assert!(!index.can_smelt(charcoal));
    }

    #[test]
    fn sources_for_lists_bits_and_nuggets_only() {
        let index = index();
        let copper = AlloyIngredient::new("ingot-copper", 0.88, 0.92);
        let iron = AlloyIngredient::new("ingot-iron", 0.0, 1.0);

        let codes: Vec<&str> = index
            .sources_for(&copper)
            .iter()
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(codes, vec!["nugget-nativecopper", "metalbit-copper"]);
        assert!(index.sources_for(&iron).is_empty());
    }
}
