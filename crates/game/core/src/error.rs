//! Common error infrastructure for bridgeworld-core.
//!
//! Domain-specific errors (e.g. [`crate::engine::EngineError`],
//! [`crate::config::ConfigError`]) live next to the code that produces them and
//! implement [`GameError`] so callers can classify failures uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can fix the situation and retry (respawn first, pick another target)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Fatal**: the environment cannot support the operation at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry after the caller changes game state.
    ///
    /// Examples: attacking while dead, respawning while alive
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown class, unknown character id
    Validation,

    /// Fatal error - required oracle data is missing.
    ///
    /// Examples: empty bestiary
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

    /// Returns true if the session cannot continue without different content.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all bridgeworld-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable upper-case code from `error_code` for logs and tests
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
