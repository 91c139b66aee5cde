//! Common error infrastructure for alloy-calc-core.
//!
//! Domain-specific errors (`AllocationError`, `SessionError`) live next to the
//! operations they validate. This module holds the classification shared by all
//! of them.
//!
//! Degenerate allocator states (nothing to redistribute, no capacity left) are
//! not errors. They are reported through [`crate::NormalizeOutcome`].

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input from the host, should not retry without changes.
    ///
    /// Examples: unknown channel index, recipe index out of range
    Validation,

    /// The calculator cannot be used in the current environment.
    ///
    /// Examples: no enabled alloy recipes were loaded
    Unavailable,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Common trait for all alloy-calc-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to act, not on impact
pub trait CalcError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Unavailable.as_str(), "unavailable");
    }
}
