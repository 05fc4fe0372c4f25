//! Parcel lifecycle service.
//!
//! Enforces the lifecycle rules on top of a [`ParcelRepository`]: address
//! changes and deletion are only allowed while a parcel is still
//! [`ParcelStatus::Registered`].

use tracing::{debug, info, warn};

use crate::domain::{
    ClientId, DomainError, NewParcel, Parcel, ParcelChanges, ParcelNumber, ParcelStatus,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::ParcelRepository;

/// The parcel store.
///
/// Holds no cache: every call re-reads authoritative state from the
/// repository. Conditional mutations (address change, delete) are checked
/// against a fresh read and then written with a status guard, so a parcel
/// that left `registered` in the meantime is never modified.
pub struct ParcelStore<R> {
    repository: R,
}

impl<R: ParcelRepository> ParcelStore<R> {
    /// Create a store over the given repository.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Borrow the underlying repository.
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Register a new parcel for `client` and return its number.
    ///
    /// # Errors
    /// Returns a persistence error if the insert fails.
    pub async fn register(&self, client: ClientId, address: &str) -> Result<ParcelNumber> {
        let parcel = NewParcel::register(client, address);
        let number = self.repository.insert(&parcel).await?;
        info!(number = %number, client = %client, "Registered parcel");
        Ok(number)
    }

    /// Fetch a parcel by number.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no such parcel exists.
    pub async fn get(&self, number: ParcelNumber) -> Result<Parcel> {
        self.repository
            .find(number)
            .await?
            .ok_or(Error::NotFound { number })
    }

    /// List every parcel owned by `client`. Empty when there are none.
    ///
    /// # Errors
    /// Returns a persistence error if the query fails.
    pub async fn list_by_client(&self, client: ClientId) -> Result<Vec<Parcel>> {
        let parcels = self.repository.find_by_client(client).await?;
        debug!(client = %client, count = parcels.len(), "Listed parcels");
        Ok(parcels)
    }

    /// Overwrite the status of a parcel, whatever its current status is.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no row was affected.
    pub async fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> Result<()> {
        let affected = self
            .repository
            .update(number, &ParcelChanges::status(status), None)
            .await?;
        if affected == 0 {
            return Err(Error::NotFound { number });
        }
        info!(number = %number, status = %status, "Updated parcel status");
        Ok(())
    }

    /// Change the delivery address of a registered parcel.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the parcel does not exist, or
    /// [`DomainError::AddressLocked`] if it is no longer registered.
    pub async fn set_address(&self, number: ParcelNumber, address: &str) -> Result<()> {
        let parcel = self.get(number).await?;
        if let Err(e) = parcel.ensure_address_mutable() {
            warn!(number = %number, status = %parcel.status, "Rejected address change");
            return Err(e.into());
        }

        let affected = self
            .repository
            .update(
                number,
                &ParcelChanges::address(address),
                Some(ParcelStatus::Registered),
            )
            .await?;
        if affected == 0 {
            return Err(self
                .lost_race(number, |number, status| DomainError::AddressLocked {
                    number,
                    status,
                })
                .await);
        }

        info!(number = %number, "Updated parcel address");
        Ok(())
    }

    /// Delete a registered parcel.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the parcel does not exist, or
    /// [`DomainError::DeleteLocked`] if it is no longer registered.
    pub async fn delete(&self, number: ParcelNumber) -> Result<()> {
        let parcel = self.get(number).await?;
        if let Err(e) = parcel.ensure_deletable() {
            warn!(number = %number, status = %parcel.status, "Rejected parcel deletion");
            return Err(e.into());
        }

        let affected = self
            .repository
            .delete(number, Some(ParcelStatus::Registered))
            .await?;
        if affected == 0 {
            return Err(self
                .lost_race(number, |number, status| DomainError::DeleteLocked {
                    number,
                    status,
                })
                .await);
        }

        info!(number = %number, "Deleted parcel");
        Ok(())
    }

    /// Explain why a guarded write matched no row.
    ///
    /// The row was either removed or moved out of `registered` between the
    /// read and the write; a fresh read tells which.
    async fn lost_race(
        &self,
        number: ParcelNumber,
        locked: fn(ParcelNumber, ParcelStatus) -> DomainError,
    ) -> Error {
        match self.get(number).await {
            Ok(parcel) => {
                warn!(
                    number = %number,
                    status = %parcel.status,
                    "Parcel changed status concurrently"
                );
                locked(number, parcel.status).into()
            }
            Err(e) => e,
        }
    }
}
