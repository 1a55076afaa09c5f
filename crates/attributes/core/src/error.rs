//! Error infrastructure for attribute-core.
//!
//! Every fallible operation in this crate returns [`AttributeError`]. Errors are
//! classified by [`ErrorSeverity`] so hosts can decide whether to abort start-up
//! (catalog errors) or silently skip an enhancement (a missing instance).
//!
//! # Design Principles
//!
//! - **Type Safety**: Malformed modifier operations cannot be constructed at all
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Pure**: No I/O and no retries

use crate::id::AttributeId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can fall back to a default.
    ///
    /// Examples: entity was never assigned the queried attribute
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: malformed identifier, non-finite modifier amount
    Validation,

    /// Fatal error - initialization cannot continue.
    ///
    /// Examples: unknown or duplicate attribute kind, inverted bounds
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error must abort initialization.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all attribute-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by the catalog, identifiers, modifiers and entity containers.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AttributeError {
    #[error("unknown attribute `{id}`")]
    UnknownAttribute { id: AttributeId },

    #[error("attribute `{id}` is already defined")]
    DuplicateAttribute { id: AttributeId },

    #[error("attribute `{id}` has invalid bounds: min {min}, base {base}, max {max}")]
    InvalidBounds {
        id: AttributeId,
        base: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid attribute identifier `{raw}`: {reason}")]
    InvalidIdentifier { raw: String, reason: &'static str },

    #[error("entity has no instance of attribute `{id}`")]
    MissingAttributeInstance { id: AttributeId },

    #[error("modifier `{modifier}` has a non-finite amount {amount}")]
    InvalidModifier { modifier: String, amount: f64 },
}

impl CoreError for AttributeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownAttribute { .. }
            | Self::DuplicateAttribute { .. }
            | Self::InvalidBounds { .. } => ErrorSeverity::Fatal,
            Self::InvalidIdentifier { .. } | Self::InvalidModifier { .. } => {
                ErrorSeverity::Validation
            }
            Self::MissingAttributeInstance { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAttribute { .. } => "UNKNOWN_ATTRIBUTE",
            Self::DuplicateAttribute { .. } => "DUPLICATE_ATTRIBUTE",
            Self::InvalidBounds { .. } => "INVALID_BOUNDS",
            Self::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
            Self::MissingAttributeInstance { .. } => "MISSING_ATTRIBUTE_INSTANCE",
            Self::InvalidModifier { .. } => "INVALID_MODIFIER",
        }
    }
}

/// Result alias used throughout the crate.
pub type AttributeResult<T> = Result<T, AttributeError>;
