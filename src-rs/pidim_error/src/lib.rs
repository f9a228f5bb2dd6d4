//! Errors and advisories for pidim
//!
//! Every error or advisory produced by the dimensional-analysis engine can be
//! converted into a [`PidimError`], a display-ready representation holding a
//! message, a severity, and optional context.

mod context;
mod traits;

use std::fmt;

pub use context::Context;
pub use traits::AsPidimError;

/// How serious a reported problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The operation failed.
    Error,
    /// The operation completed, but with an adjusted input.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Unified error representation for pidim
///
/// This struct represents errors and advisories in a format suitable for
/// display to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PidimError {
    /// Whether this is a failure or an advisory
    severity: Severity,
    /// Human-readable message
    message: String,
    /// Optional context information
    context: Vec<Context>,
}

impl PidimError {
    /// Creates a new error-level `PidimError` from a type that implements
    /// `AsPidimError`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pidim_error::{AsPidimError, PidimError, Severity};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsPidimError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = PidimError::from_error(&SimpleError("something went wrong".to_string()));
    /// assert_eq!(error.severity(), Severity::Error);
    /// assert_eq!(error.message(), "something went wrong");
    /// ```
    pub fn from_error(error: &impl AsPidimError) -> Self {
        Self {
            severity: Severity::Error,
            message: error.message(),
            context: error.context(),
        }
    }

    /// Creates a new warning-level `PidimError` from a type that implements
    /// `AsPidimError`
    pub fn from_warning(warning: &impl AsPidimError) -> Self {
        Self {
            severity: Severity::Warning,
            message: warning.message(),
            context: warning.context(),
        }
    }

    /// Returns the severity
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context information
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}

impl fmt::Display for PidimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

impl std::error::Error for PidimError {}
