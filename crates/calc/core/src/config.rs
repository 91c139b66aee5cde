use core::num::NonZeroU32;

/// Calculator configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    /// Target quantity (in units) shown when a calculator opens.
    pub default_target_units: u32,

    /// Units of molten metal produced by one discrete item (a metal bit).
    pub units_per_item: NonZeroU32,

    /// Clamp channel edits to the channel's bounds before normalizing.
    ///
    /// Slider widgets already clamp to their track, so hosts that trust
    /// their input can turn this off.
    pub clamp_edits: bool,

    /// Maximum number of saved sessions kept by a [`crate::SessionCache`].
    pub max_cached_sessions: usize,
}

impl CalculatorConfig {
    // ===== compile-time constants =====
    /// Sum every allocation is normalized towards.
    pub const TARGET_PERCENT: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TARGET_UNITS: u32 = 100;
    pub const DEFAULT_UNITS_PER_ITEM: NonZeroU32 = match NonZeroU32::new(5) {
        Some(units) => units,
        None => panic!("units per item must be non-zero"),
    };
    pub const DEFAULT_MAX_CACHED_SESSIONS: usize = 64;

    pub fn new() -> Self {
        Self {
            default_target_units: Self::DEFAULT_TARGET_UNITS,
            units_per_item: Self::DEFAULT_UNITS_PER_ITEM,
            clamp_edits: true,
            max_cached_sessions: Self::DEFAULT_MAX_CACHED_SESSIONS,
        }
    }

    #[must_use]
    pub fn with_target_units(mut self, units: u32) -> Self {
        self.default_target_units = units.max(1);
        self
    }

    #[must_use]
    pub fn with_units_per_item(mut self, units: NonZeroU32) -> Self {
        self.units_per_item = units;
        self
    }

    #[must_use]
    pub fn with_clamp_edits(mut self, clamp: bool) -> Self {
        self.clamp_edits = clamp;
        self
    }

    #[must_use]
    pub fn with_max_cached_sessions(mut self, max: usize) -> Self {
        self.max_cached_sessions = max.max(1);
        self
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
