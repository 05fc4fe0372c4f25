//! Domain errors for parcel lifecycle rules.
//!
//! These errors are returned when a requested mutation would violate the
//! `registered`-only precondition, or when a status tag cannot be parsed.
//!
//! # Examples
//!
//! ```
//! use parcel_tracker::domain::error::DomainError;
//! use parcel_tracker::domain::parcel::ParcelStatus;
//!
//! let result = "lost".parse::<ParcelStatus>();
//! assert!(matches!(result, Err(DomainError::UnknownStatus(_))));
//! ```

use thiserror::Error;

use super::id::ParcelNumber;
use super::parcel::ParcelStatus;

/// Errors that occur when parcel lifecycle invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The address was changed on a parcel that already left `registered`.
    #[error("address can only be updated for registered parcels")]
    AddressLocked {
        /// Parcel the update was attempted on.
        number: ParcelNumber,
        /// Status the parcel was in at the time.
        status: ParcelStatus,
    },

    /// A parcel that already left `registered` was asked to be deleted.
    #[error("only registered parcels can be deleted")]
    DeleteLocked {
        /// Parcel the delete was attempted on.
        number: ParcelNumber,
        /// Status the parcel was in at the time.
        status: ParcelStatus,
    },

    /// A status tag outside the closed set.
    #[error("unknown parcel status '{0}' (expected registered, sent or delivered)")]
    UnknownStatus(String),
}

impl DomainError {
    /// True for the variants that reject a mutation because of parcel state.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::AddressLocked { .. } | Self::DeleteLocked { .. })
    }
}
