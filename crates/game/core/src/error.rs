//! Common error infrastructure for museum-core.
//!
//! Domain-specific errors (e.g. [`CatalogError`](crate::env::CatalogError)) live
//! next to the data they validate and implement [`GameError`] so front ends can
//! classify them uniformly.
//!
//! Aggregation itself never fails: unresolved slot references degrade to a zero
//! contribution. Errors only arise while building or loading catalogs.

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Non-fatal condition worth surfacing (e.g. a modifier with an unknown effect).
    Warning,

    /// Invalid input data, should be rejected without retry.
    ///
    /// Examples: duplicate ore name, ore without any museum effect
    Validation,

    /// Unrecoverable configuration problem; the catalog cannot be used.
    ///
    /// Examples: rarity tier without a bonus mapping
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the condition still allows the data to be used.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Warning)
    }
}

/// Common trait for all museum-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on whether the catalog is still usable
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
