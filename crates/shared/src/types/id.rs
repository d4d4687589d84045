//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing an `EmployeeId` where a `SalonId` is expected.
//! The upstream salon API keys every record by UUID, so each wrapper is transparent over `Uuid`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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
    };
}

typed_id!(SalonId, "Unique identifier for a salon.");
typed_id!(EmployeeId, "Unique identifier for a salon employee.");
typed_id!(CustomerId, "Unique identifier for a customer.");
typed_id!(SaleId, "Unique identifier for a completed sale.");
typed_id!(CommissionId, "Unique identifier for an employee commission.");
typed_id!(AppointmentId, "Unique identifier for an appointment.");
typed_id!(ServiceId, "Unique identifier for a salon service.");
typed_id!(ProductId, "Unique identifier for a retail product.");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
