//! Channels and their percent bounds.

use super::AllocationError;

/// Upper limit for any channel bound.
pub const MAX_PERCENT: u32 = 100;

/// Legal range `[min, max]` for a channel's percentage.
///
/// Always ordered and within `[0, 100]`; every constructor enforces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoundsRepr", into = "BoundsRepr"))]
pub struct PercentBounds {
    min: u32,
    max: u32,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BoundsRepr {
    min: u32,
    max: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<BoundsRepr> for PercentBounds {
    type Error = AllocationError;

    fn try_from(repr: BoundsRepr) -> Result<Self, Self::Error> {
        Self::new(repr.min, repr.max)
    }
}

#[cfg(feature = "serde")]
impl From<PercentBounds> for BoundsRepr {
    fn from(bounds: PercentBounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

impl PercentBounds {
    /// Creates bounds, rejecting `min > max` and anything above 100.
    pub fn new(min: u32, max: u32) -> Result<Self, AllocationError> {
        if min > max || max > MAX_PERCENT {
            return Err(AllocationError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// The unrestricted `[0, 100]` range.
    pub const fn full() -> Self {
        Self {
            min: 0,
            max: MAX_PERCENT,
        }
    }

    /// Derives bounds from fractional ratios such as `0.08..0.12`.
    ///
    /// Each ratio is scaled to a percentage and rounded half-to-even, then
    /// clamped to `[0, 100]`. A reversed pair is swapped.
    pub fn from_ratios(min_ratio: f64, max_ratio: f64) -> Self {
        let a = ratio_to_percent(min_ratio);
        let b = ratio_to_percent(max_ratio);
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Midpoint of the range, halves truncated.
    pub const fn midpoint(&self) -> u32 {
        (self.min + self.max) / 2
    }

    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

impl Default for PercentBounds {
    fn default() -> Self {
        Self::full()
    }
}

fn ratio_to_percent(ratio: f64) -> u32 {
    if !ratio.is_finite() {
        return 0;
    }
    (ratio * f64::from(MAX_PERCENT))
        .round_ties_even()
        .clamp(0.0, f64::from(MAX_PERCENT)) as u32
}

/// Which way a normalization pass moves the unprotected channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// The total is above target; channels move toward their minimum.
    Reduce,
    /// The total is below target; channels move toward their maximum.
    Increase,
}

/// One adjustable percentage slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    index: usize,
    bounds: PercentBounds,
    current: u32,
}

impl Channel {
    /// Creates a channel resting at its lower bound.
    pub const fn new(index: usize, bounds: PercentBounds) -> Self {
        Self {
            index,
            bounds,
            current: bounds.min,
        }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn bounds(&self) -> PercentBounds {
        self.bounds
    }

    /// Current percentage.
    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn in_bounds(&self) -> bool {
        self.bounds.contains(self.current)
    }

    /// How far this channel can still move in `direction`.
    pub const fn capacity(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Reduce => self.current.saturating_sub(self.bounds.min),
            Direction::Increase => self.bounds.max.saturating_sub(self.current),
        }
    }

    pub(crate) fn reset_to_midpoint(&mut self) {
        self.current = self.bounds.midpoint();
    }

    pub(crate) fn set_current(&mut self, value: u32) {
        self.current = value;
    }

    /// Moves `amount` toward the bound named by `direction`.
    ///
    /// `amount` must not exceed [`Self::capacity`] for the same direction.
    pub(crate) fn shift(&mut self, direction: Direction, amount: u32) {
        match direction {
            Direction::Reduce => self.current -= amount,
            Direction::Increase => self.current += amount,
        }
    }
}
