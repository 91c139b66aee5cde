//! Allocation errors.
//!
//! Only boundary mistakes are errors. An allocation that cannot be brought back
//! to exactly 100% is reported through [`super::NormalizeOutcome`].

use crate::error::{CalcError, ErrorSeverity};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AllocationError {
    /// The edit referenced a channel that is not part of the selection.
    #[error("channel {index} does not exist (channels: {len})")]
    UnknownChannel {
        /// Requested channel index.
        index: usize,
        /// Number of channels in the allocation.
        len: usize,
    },

    /// Bounds outside `[0, 100]` or with `min > max`.
    #[error("invalid percent bounds [{min}, {max}]")]
    InvalidBounds { min: u32, max: u32 },
}

impl CalcError for AllocationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownChannel { .. } => "ALLOCATION_UNKNOWN_CHANNEL",
            Self::InvalidBounds { .. } => "ALLOCATION_INVALID_BOUNDS",
        }
    }
}
