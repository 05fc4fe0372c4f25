//! Parcel records and their lifecycle status.
//!
//! A [`Parcel`] starts out [`ParcelStatus::Registered`]. While it stays there
//! its address may change and it may be deleted; once it moves on to `sent`
//! or `delivered` both are frozen. Status itself may be overwritten freely.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{ClientId, ParcelNumber};

/// Lifecycle status of a parcel.
///
/// Persisted as its lowercase tag (see [`ParcelStatus::as_str`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelStatus {
    /// Initial status. The only one that allows address changes and deletion.
    #[default]
    Registered,
    /// Handed over for delivery.
    Sent,
    /// Received by the addressee.
    Delivered,
}

impl ParcelStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Registered, Self::Sent, Self::Delivered];

    /// The persisted text tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Exact inverse of [`ParcelStatus::as_str`].
    ///
    /// Unlike [`FromStr`], which is meant for user input and ignores case
    /// and surrounding whitespace, this only accepts the canonical tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == tag)
    }

    /// Whether the parcel may still be edited or removed.
    #[must_use]
    pub const fn is_mutable(self) -> bool {
        match self {
            Self::Registered => true,
            Self::Sent | Self::Delivered => false,
        }
    }
}

impl fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParcelStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| DomainError::UnknownStatus(tag.to_string()))
    }
}

/// A parcel as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    pub number: ParcelNumber,
    pub client: ClientId,
    pub status: ParcelStatus,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Parcel {
    /// Check that the address of this parcel may be changed.
    ///
    /// # Errors
    /// Returns [`DomainError::AddressLocked`] unless the parcel is registered.
    pub fn ensure_address_mutable(&self) -> Result<(), DomainError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(DomainError::AddressLocked {
                number: self.number,
                status: self.status,
            })
        }
    }

    /// Check that this parcel may be deleted.
    ///
    /// # Errors
    /// Returns [`DomainError::DeleteLocked`] unless the parcel is registered.
    pub fn ensure_deletable(&self) -> Result<(), DomainError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(DomainError::DeleteLocked {
                number: self.number,
                status: self.status,
            })
        }
    }
}

/// A parcel that has not been assigned a number yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParcel {
    pub client: ClientId,
    pub status: ParcelStatus,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl NewParcel {
    /// Build a freshly registered parcel stamped with the current time.
    ///
    /// The timestamp is truncated to whole seconds, matching its RFC3339
    /// storage form.
    pub fn register(client: ClientId, address: impl Into<String>) -> Self {
        Self::register_at(client, address, Utc::now().trunc_subsecs(0))
    }

    /// Build a freshly registered parcel with an explicit creation time.
    pub fn register_at(
        client: ClientId,
        address: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at,
        }
    }

    /// Attach the number the backend assigned.
    #[must_use]
    pub fn into_parcel(self, number: ParcelNumber) -> Parcel {
        Parcel {
            number,
            client: self.client,
            status: self.status,
            address: self.address,
            created_at: self.created_at,
        }
    }
}

/// Field changes applied by an update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParcelChanges {
    pub status: Option<ParcelStatus>,
    pub address: Option<String>,
}

impl ParcelChanges {
    /// Change only the status.
    #[must_use]
    pub fn status(status: ParcelStatus) -> Self {
        Self {
            status: Some(status),
            address: None,
        }
    }

    /// Change only the address.
    pub fn address(address: impl Into<String>) -> Self {
        Self {
            status: None,
            address: Some(address.into()),
        }
    }

    /// True when applying these changes would modify nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.address.is_none()
    }

    /// Apply these changes to an in-memory parcel.
    pub fn apply_to(&self, parcel: &mut Parcel) {
        if let Some(status) = self.status {
            parcel.status = status;
        }
        if let Some(address) = &self.address {
            parcel.address.clone_from(address);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel_with(status: ParcelStatus) -> Parcel {
        let mut parcel = NewParcel::register(ClientId::new(1000), "test")
            .into_parcel(ParcelNumber::new(1));
        parcel.status = status;
        parcel
    }

    #[test]
    fn status_round_trips_through_its_tag() {
        for status in ParcelStatus::ALL {
            assert_eq!(status.as_str().parse::<ParcelStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_parsing_ignores_case_and_whitespace() {
        assert_eq!(" Sent ".parse::<ParcelStatus>().unwrap(), ParcelStatus::Sent);
        assert_eq!(
            "DELIVERED".parse::<ParcelStatus>().unwrap(),
            ParcelStatus::Delivered
        );
    }

    #[test]
    fn from_tag_accepts_only_canonical_tags() {
        for status in ParcelStatus::ALL {
            assert_eq!(ParcelStatus::from_tag(status.as_str()), Some(status));
        }
        assert_eq!(ParcelStatus::from_tag("Registered"), None);
        assert_eq!(ParcelStatus::from_tag(" sent"), None);
    }

    #[test]
    fn status_parsing_rejects_unknown_tags() {
        let err = "lost".parse::<ParcelStatus>().unwrap_err();
        assert_eq!(err, DomainError::UnknownStatus("lost".to_string()));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ParcelStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");
    }

    #[test]
    fn only_registered_is_mutable() {
        assert!(ParcelStatus::Registered.is_mutable());
        assert!(!ParcelStatus::Sent.is_mutable());
        assert!(!ParcelStatus::Delivered.is_mutable());
    }

    #[test]
    fn registered_parcel_allows_address_change_and_delete() {
        let parcel = parcel_with(ParcelStatus::Registered);
        assert!(parcel.ensure_address_mutable().is_ok());
        assert!(parcel.ensure_deletable().is_ok());
    }

    #[test]
    fn sent_parcel_is_frozen() {
        let parcel = parcel_with(ParcelStatus::Sent);

        let err = parcel.ensure_address_mutable().unwrap_err();
        assert_eq!(
            err.to_string(),
            "address can only be updated for registered parcels"
        );
        assert!(err.is_invalid_state());

        let err = parcel.ensure_deletable().unwrap_err();
        assert_eq!(err.to_string(), "only registered parcels can be deleted");
        assert!(err.is_invalid_state());
    }

    #[test]
    fn delivered_parcel_is_frozen() {
        let parcel = parcel_with(ParcelStatus::Delivered);
        assert!(matches!(
            parcel.ensure_address_mutable(),
            Err(DomainError::AddressLocked {
                status: ParcelStatus::Delivered,
                ..
            })
        ));
        assert!(matches!(
            parcel.ensure_deletable(),
            Err(DomainError::DeleteLocked { .. })
        ));
    }

    #[test]
    fn register_stamps_whole_seconds() {
        let parcel = NewParcel::register(ClientId::new(7), "somewhere");
        assert_eq!(parcel.status, ParcelStatus::Registered);
        assert_eq!(parcel.created_at.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn changes_apply_only_present_fields() {
        let mut parcel = parcel_with(ParcelStatus::Registered);
        ParcelChanges::address("elsewhere").apply_to(&mut parcel);
        assert_eq!(parcel.address, "elsewhere");
        assert_eq!(parcel.status, ParcelStatus::Registered);

        ParcelChanges::status(ParcelStatus::Sent).apply_to(&mut parcel);
        assert_eq!(parcel.status, ParcelStatus::Sent);
        assert_eq!(parcel.address, "elsewhere");
    }

    #[test]
    fn default_changes_are_empty() {
        assert!(ParcelChanges::default().is_empty());
        assert!(!ParcelChanges::status(ParcelStatus::Sent).is_empty());
    }
}
