//! Percentage channels and the sum-to-100 allocator.
//!
//! An [`AllocationState`] holds one [`Channel`] per ingredient. Editing one
//! channel pushes the difference onto the others in proportion to how much
//! room each has left, without ever crossing a channel's [`PercentBounds`].
//! The pass is a best-effort single sweep; see [`normalize()`] for the
//! rounding behaviour.
mod channel;
mod error;
mod normalize;
mod state;

pub use channel::{Channel, Direction, MAX_PERCENT, PercentBounds};
pub use error::AllocationError;
pub use normalize::{NormalizeOutcome, normalize, total_percent};
pub use state::AllocationState;
