use super::channel::{Channel, PercentBounds};
use super::error::AllocationError;
use super::normalize::{NormalizeOutcome, normalize, total_percent};
use crate::config::CalculatorConfig;

/// Ordered set of channels kept near a 100% total.
///
/// Created when an ingredient set is selected, mutated in place by
/// single-channel edits, and replaced wholesale when the selection changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationState {
    channels: Vec<Channel>,
}

impl AllocationState {
    /// Builds channels for `bounds` in order. Values rest at their lower bound
    /// until [`Self::initialize`] runs.
    pub fn new(bounds: impl IntoIterator<Item = PercentBounds>) -> Self {
        let channels = bounds
            .into_iter()
            .enumerate()
            .map(|(index, bounds)| Channel::new(index, bounds))
            .collect();
        Self { channels }
    }

    /// Builds and initializes in one step.
    pub fn initialized(bounds: impl IntoIterator<Item = PercentBounds>) -> Self {
        let mut state = Self::new(bounds);
        state.initialize();
        state
    }

    /// Moves every channel to its midpoint, then normalizes with no channel
    /// protected.
    pub fn initialize(&mut self) -> NormalizeOutcome {
        for channel in &mut self.channels {
            channel.reset_to_midpoint();
        }
        let outcome = normalize(&mut self.channels, None);
        tracing::debug!(
            channels = self.channels.len(),
            total = self.total(),
            outcome = outcome.as_str(),
            "allocation initialized"
        );
        outcome
    }

    /// Stores `value` on channel `index` and rebalances the others.
    ///
    /// The value is stored as given; callers are expected to have clamped it
    /// to the channel's bounds. See [`Self::set_channel_clamped`].
    pub fn set_channel(
        &mut self,
        index: usize,
        value: u32,
    ) -> Result<NormalizeOutcome, AllocationError> {
        let len = self.channels.len();
        let channel = self
            .channels
            .get_mut(index)
            .ok_or(AllocationError::UnknownChannel { index, len })?;
        channel.set_current(value);

        let outcome = normalize(&mut self.channels, Some(index));
        tracing::debug!(
            index,
            value,
            total = self.total(),
            outcome = outcome.as_str(),
            "channel edited"
        );
        Ok(outcome)
    }

    /// Like [`Self::set_channel`] but clamps `value` to the channel's bounds.
    pub fn set_channel_clamped(
        &mut self,
        index: usize,
        value: u32,
    ) -> Result<NormalizeOutcome, AllocationError> {
        let len = self.channels.len();
        let bounds = self
            .channels
            .get(index)
            .map(Channel::bounds)
            .ok_or(AllocationError::UnknownChannel { index, len })?;
        self.set_channel(index, bounds.clamp(value))
    }

    /// Runs a normalization pass, protecting `changed` if given.
    pub fn normalize(&mut self, changed: Option<usize>) -> NormalizeOutcome {
        normalize(&mut self.channels, changed)
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn total(&self) -> i64 {
        total_percent(&self.channels)
    }

    /// Returns true when the total is within one point of 100.
    pub fn is_balanced(&self) -> bool {
        (self.total() - i64::from(CalculatorConfig::TARGET_PERCENT)).abs() <= 1
    }

    pub fn percents(&self) -> Vec<u32> {
        self.channels.iter().map(Channel::current).collect()
    }

    /// Returns true if this state was built for exactly these bounds.
    pub fn matches_bounds(&self, bounds: &[PercentBounds]) -> bool {
        self.channels.len() == bounds.len()
            && self
                .channels
                .iter()
                .zip(bounds)
                .all(|(channel, bounds)| channel.bounds() == *bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(pairs: &[(u32, u32)]) -> Vec<PercentBounds> {
        pairs
            .iter()
            .map(|&(min, max)| PercentBounds::new(min, max).unwrap())
            .collect()
    }

    #[test]
    fn initialize_uses_midpoints_then_normalizes() {
        let state = AllocationState::initialized(bounds(&[(88, 92), (8, 12)]));
        assert_eq!(state.percents(), vec![90, 10]);

        let state = AllocationState::initialized(bounds(&[(50, 70), (20, 30), (10, 20)]));
        // midpoints 60 + 25 + 15 = 100
        assert_eq!(state.percents(), vec![60, 25, 15]);
        assert!(state.is_balanced());
    }

    #[test]
    fn initialize_rebalances_off_center_midpoints() {
        // midpoints 50 + 50 + 50 = 150
        let mut state = AllocationState::new(bounds(&[(0, 100), (0, 100), (0, 100)]));
        let outcome = state.initialize();

        assert!(outcome.is_exact());
        assert_eq!(state.total(), 100);
    }

    #[test]
    fn set_channel_rejects_unknown_index() {
        let mut state = AllocationState::initialized(bounds(&[(0, 100)]));
        assert_eq!(
            state.set_channel(3, 10),
            Err(AllocationError::UnknownChannel { index: 3, len: 1 })
        );
    }

    #[test]
    fn clamped_edit_respects_bounds() {
        let mut state = AllocationState::initialized(bounds(&[(60, 70), (30, 40)]));

        state.set_channel_clamped(0, 95).unwrap();

        assert_eq!(state.percents(), vec![70, 30]);
    }

    #[test]
    fn reversed_ratios_are_ordered_before_clamping() {
        assert!(PercentBounds::new(60, 40).is_err());

        // a reversed ratio pair is ordered on construction
        let mut state = AllocationState::initialized([PercentBounds::from_ratios(0.6, 0.4)]);
        state.set_channel_clamped(0, 75).unwrap();

        assert_eq!(state.percents(), vec![60]);
    }

    #[test]
    fn initialize_truncates_odd_midpoints() {
        // midpoints 12 + 87 = 99; each share of the missing point rounds to 0
        let state = AllocationState::initialized(bounds(&[(10, 15), (85, 90)]));

        assert_eq!(state.percents(), vec![12, 87]);
        assert!(state.is_balanced());
    }

    #[test]
    fn matches_bounds_compares_every_channel() {
        let pairs = bounds(&[(60, 70), (30, 40)]);
        let state = AllocationState::initialized(pairs.clone());

        assert!(state.matches_bounds(&pairs));
        assert!(!state.matches_bounds(&pairs[..1]));
        assert!(!state.matches_bounds(&bounds(&[(60, 70), (30, 41)])));
    }
}
