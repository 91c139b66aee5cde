//! Percent share of a target quantity → whole discrete items.

use core::num::NonZeroU32;

use crate::allocation::Channel;
use crate::config::CalculatorConfig;

/// Target quantity and the size of one discrete item, both in units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub total_units: u32,
    pub units_per_item: NonZeroU32,
}

impl Target {
    pub const fn new(total_units: u32, units_per_item: NonZeroU32) -> Self {
        Self {
            total_units,
            units_per_item,
        }
    }

    /// Target using the configured item size and default quantity.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.default_target_units, config.units_per_item)
    }

    /// Discrete items needed for `channel`'s share; 0 means none.
    pub fn resolve(&self, channel: &Channel) -> u32 {
        resolve_count(channel.current(), self.total_units, self.units_per_item)
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}

/// `ceil(total_units * percent / 100 / units_per_item)`.
pub fn resolve_count(percent: u32, total_units: u32, units_per_item: NonZeroU32) -> u32 {
    let units = f64::from(total_units) * f64::from(percent) / 100.0;
    (units / f64::from(units_per_item.get())).ceil() as u32
}
