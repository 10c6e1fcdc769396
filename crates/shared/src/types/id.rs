//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `DebtId` where a `SavingGoalId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $label:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            /// Parses a caller-supplied identifier.
            ///
            /// # Errors
            ///
            /// Returns `AppError::Validation` when the string is not a UUID.
            pub fn parse(raw: &str) -> Result<Self, AppError> {
                Uuid::parse_str(raw.trim())
                    .map(Self)
                    .map_err(|_| AppError::Validation(format!("Invalid {} ID: {raw}", $label)))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

typed_id!(UserId, "user", "Unique identifier for the user owning a record.");
typed_id!(BudgetEntryId, "budget", "Unique identifier for a budget entry.");
typed_id!(DebtId, "debt", "Unique identifier for a debt.");
typed_id!(
    RecurringPaymentId,
    "recurring payment",
    "Unique identifier for a recurring payment."
);
typed_id!(SavingGoalId, "saving", "Unique identifier for a savings goal.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = DebtId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_typed_id_into_uuid() {
        let uuid = Uuid::new_v4();
        let back: Uuid = BudgetEntryId::from_uuid(uuid).into();
        assert_eq!(back, uuid);
    }

    #[test]
    fn test_typed_id_display() {
        let uuid = Uuid::new_v4();
        let id = UserId::from_uuid(uuid);
        assert_eq!(format!("{id}"), uuid.to_string());
    }

    #[test]
    fn test_typed_id_from_str() {
        let uuid = Uuid::new_v4();
        let id = SavingGoalId::from_str(&uuid.to_string()).unwrap();
        assert_eq!(id.into_inner(), uuid);
        assert!(SavingGoalId::from_str("invalid").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_id_as_validation_error() {
        let err = DebtId::parse("not-a-uuid").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: Invalid debt ID: not-a-uuid");
    }

    #[test]
    fn test_parse_accepts_padded_uuid() {
        let uuid = Uuid::new_v4();
        let id = RecurringPaymentId::parse(&format!(" {uuid} ")).unwrap();
        assert_eq!(id.into_inner(), uuid);
    }
}
