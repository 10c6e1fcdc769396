//! Errors raised while preparing, deriving, aggregating or listing records.

use fintrack_shared::AppError;
use thiserror::Error;
use uuid::Uuid;

use crate::schedule::ScheduleError;

/// Result type alias using `RecordError`.
pub type RecordResult<T> = Result<T, RecordError>;

/// Record engine errors.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A required field was not supplied.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// An update carried no changes.
    #[error("At least one field is required to update")]
    NoChanges,

    /// An amount field was negative.
    #[error("{0} cannot be negative")]
    NegativeAmount(&'static str),

    /// A field was present but malformed.
    #[error("Invalid {field}: {reason}")]
    InvalidValue {
        /// Field name as seen by the caller.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Debt paying date precedes the taken date.
    #[error("Debt paying date cannot be earlier than the debt taken date")]
    InvalidDateOrder,

    /// Identifier well-formed but no matching owned record.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind.
        kind: &'static str,
        /// Requested identifier.
        id: Uuid,
    },

    /// A derived field could not be computed from validated input.
    #[error("Derivation failed: {0}")]
    Derivation(String),

    /// A persistence or search collaborator failed.
    #[error("Repository error: {0}")]
    Repository(String),
}

impl RecordError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(kind: &'static str, id: impl Into<Uuid>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create an invalid value error.
    #[must_use]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl std::fmt::Display) -> Self {
        Self::Repository(msg.to_string())
    }
}

impl From<ScheduleError> for RecordError {
    fn from(err: ScheduleError) -> Self {
        Self::Derivation(err.to_string())
    }
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::NotFound { .. } => Self::NotFound(err.to_string()),
            RecordError::Derivation(_) => Self::Internal(err.to_string()),
            RecordError::Repository(msg) => Self::Database(msg),
            _ => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RecordError::MissingField("amount"), 400)]
    #[case(RecordError::NoChanges, 400)]
    #[case(RecordError::NegativeAmount("debtAmount"), 400)]
    #[case(RecordError::invalid("category", "too short"), 400)]
    #[case(RecordError::InvalidDateOrder, 400)]
    #[case(RecordError::not_found("Debt", Uuid::nil()), 404)]
    #[case(RecordError::Derivation("overflow".into()), 500)]
    #[case(RecordError::repository("connection reset"), 500)]
    fn test_maps_to_app_error_status(#[case] err: RecordError, #[case] status: u16) {
        assert_eq!(AppError::from(err).status_code(), status);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            RecordError::MissingField("goalAmount").to_string(),
            "goalAmount is required"
        );
        assert_eq!(
            RecordError::not_found("Debt", Uuid::nil()).to_string(),
            "Debt not found: 00000000-0000-0000-0000-000000000000"
        );
    }
}
