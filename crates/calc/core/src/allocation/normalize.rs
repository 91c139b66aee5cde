//! Proportional redistribution toward a 100% total.
//!
//! One pass, in channel order. Each unprotected channel absorbs a share of the
//! excess (or deficit) proportional to how far it can still move, rounded half
//! to even and capped by its own capacity and by what is left to distribute.
//! Shares are always computed against the original difference, so rounding can
//! leave a remainder; no second pass is attempted.

use super::channel::{Channel, Direction};
use crate::config::CalculatorConfig;

/// Result of a normalization pass.
///
/// None of these are failures. `NoOthers`, `NoCapacity` and a non-zero
/// `leftover` all mean the total stays away from 100 until the next edit or
/// re-initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormalizeOutcome {
    /// The total already matched the target.
    Balanced,

    /// Every channel was protected; nothing could absorb the difference.
    NoOthers { difference: i64 },

    /// The other channels were already pinned at their bounds.
    NoCapacity { difference: i64 },

    /// The difference was spread over the other channels.
    Redistributed {
        direction: Direction,
        /// Percentage points actually moved.
        moved: u32,
        /// Percentage points that could not be placed in this pass.
        leftover: u32,
    },
}

impl NormalizeOutcome {
    /// Returns true when the pass ends with the total at exactly 100.
    pub const fn is_exact(&self) -> bool {
        matches!(
            self,
            Self::Balanced | Self::Redistributed { leftover: 0, .. }
        )
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::NoOthers { .. } => "no_others",
            Self::NoCapacity { .. } => "no_capacity",
            Self::Redistributed { .. } => "redistributed",
        }
    }
}

/// Sum of the channels' current percentages.
pub fn total_percent(channels: &[Channel]) -> i64 {
    channels.iter().map(|c| i64::from(c.current())).sum()
}

/// Rebalances `channels` so their total approaches 100.
///
/// The channel whose [`Channel::index`] equals `changed` keeps its value; with
/// `None` every channel may move.
pub fn normalize(channels: &mut [Channel], changed: Option<usize>) -> NormalizeOutcome {
    let difference = total_percent(channels) - i64::from(CalculatorConfig::TARGET_PERCENT);
    if difference == 0 {
        return NormalizeOutcome::Balanced;
    }

    let direction = if difference > 0 {
        Direction::Reduce
    } else {
        Direction::Increase
    };

    let capacities: Vec<(usize, u32)> = channels
        .iter()
        .enumerate()
        .filter(|(_, channel)| Some(channel.index()) != changed)
        .map(|(position, channel)| (position, channel.capacity(direction)))
        .collect();

    if capacities.is_empty() {
        tracing::trace!(difference, "normalize: no unprotected channels");
        return NormalizeOutcome::NoOthers { difference };
    }

    let total_capacity: u64 = capacities.iter().map(|&(_, cap)| u64::from(cap)).sum();
    if total_capacity == 0 {
        tracing::trace!(difference, "normalize: no capacity left");
        return NormalizeOutcome::NoCapacity { difference };
    }

    let magnitude = difference.unsigned_abs();
    let mut remaining = magnitude;

    for (position, capacity) in capacities {
        if remaining == 0 {
            break;
        }

        let proportion = f64::from(capacity) / total_capacity as f64;
        let share = (magnitude as f64 * proportion).round_ties_even() as u64;
        let adjustment = share.min(u64::from(capacity)).min(remaining);

        // adjustment <= capacity <= u32::MAX
        channels[position].shift(direction, adjustment as u32);
        remaining -= adjustment;
    }

    let outcome = NormalizeOutcome::Redistributed {
        direction,
        moved: (magnitude - remaining) as u32,
        leftover: remaining as u32,
    };
    tracing::trace!(?outcome, "normalize: redistributed");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::PercentBounds;

    fn channels(spec: &[(u32, u32, u32)]) -> Vec<Channel> {
        spec.iter()
            .enumerate()
            .map(|(index, &(min, max, current))| {
                let mut channel = Channel::new(index, PercentBounds::new(min, max).unwrap());
                channel.set_current(current);
                channel
            })
            .collect()
    }

    fn values(channels: &[Channel]) -> Vec<u32> {
        channels.iter().map(Channel::current).collect()
    }

    #[test]
    fn redistributes_excess_proportionally_to_capacity() {
        let mut chans = channels(&[(10, 90, 60), (10, 90, 30), (10, 90, 40)]);

        let outcome = normalize(&mut chans, Some(0));

        assert_eq!(values(&chans), vec![60, 18, 22]);
        assert_eq!(
            outcome,
            NormalizeOutcome::Redistributed {
                direction: Direction::Reduce,
                moved: 30,
                leftover: 0,
            }
        );
    }

    #[test]
    fn fills_deficit_toward_maximums() {
        let mut chans = channels(&[(0, 100, 20), (0, 50, 30), (0, 50, 10)]);

        // difference = -40; capacities 20 and 40
        let outcome = normalize(&mut chans, Some(0));

        assert_eq!(values(&chans), vec![20, 43, 37]);
        assert!(outcome.is_exact());
    }

    #[test]
    fn balanced_total_is_a_no_op() {
        let mut chans = channels(&[(0, 100, 25), (0, 100, 75)]);
        let before = chans.clone();

        assert_eq!(normalize(&mut chans, None), NormalizeOutcome::Balanced);
        assert_eq!(chans, before);
    }

    #[test]
    fn lone_protected_channel_keeps_its_value() {
        let mut chans = channels(&[(0, 100, 37)]);

        let outcome = normalize(&mut chans, Some(0));

        assert_eq!(values(&chans), vec![37]);
        assert_eq!(outcome, NormalizeOutcome::NoOthers { difference: -63 });
    }

    #[test]
    fn pinned_channels_report_no_capacity() {
        let mut chans = channels(&[(50, 90, 90), (20, 20, 20)]);

        let outcome = normalize(&mut chans, Some(0));

        assert_eq!(values(&chans), vec![90, 20]);
        assert_eq!(outcome, NormalizeOutcome::NoCapacity { difference: 10 });
        assert!(!outcome.is_exact());
    }

    #[test]
    fn single_pass_can_leave_a_remainder() {
        // +1 over two equal capacities: each share is 0.5, which rounds to 0
        let mut chans = channels(&[(0, 100, 51), (0, 100, 25), (0, 100, 25)]);

        let outcome = normalize(&mut chans, Some(0));

        assert_eq!(values(&chans), vec![51, 25, 25]);
        assert_eq!(
            outcome,
            NormalizeOutcome::Redistributed {
                direction: Direction::Reduce,
                moved: 0,
                leftover: 1,
            }
        );
    }

    #[test]
    fn unprotected_pass_moves_every_channel() {
        let mut chans = channels(&[(0, 100, 50), (0, 100, 50), (0, 100, 50)]);

        normalize(&mut chans, None);

        assert_eq!(total_percent(&chans), 100);
        assert!(chans.iter().all(Channel::in_bounds));
    }
}
