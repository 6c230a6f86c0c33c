//! Error types for event dashboard operations.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending request field (wire name, camelCase).
    pub field: &'static str,
    /// Human-readable message for that field.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Error taxonomy for the event dashboard.
///
/// Every failure is classified into one of these kinds before it
/// crosses the HTTP boundary; the boundary performs translation only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Malformed or missing input fields.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Composite (email, event) key conflict on registration.
    #[error("This email is already registered for this event.")]
    DuplicateRegistration,

    /// Referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Persistence-layer failure. The message is logged server-side
    /// and never exposed to callers.
    #[error("Database error: {0}")]
    Database(String),
}

impl DashboardError {
    /// Returns `true` if this error is due to invalid user input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eventdash_core::error::DashboardError;
    /// assert!(DashboardError::DuplicateRegistration.is_user_error());
    /// assert!(!DashboardError::Database("connection reset".to_string()).is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::DuplicateRegistration)
    }
}
