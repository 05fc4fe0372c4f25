//! Persistence port for parcel rows.

use std::future::Future;

use crate::domain::{ClientId, NewParcel, Parcel, ParcelChanges, ParcelNumber, ParcelStatus};
use crate::error::Result;

/// Row storage for parcels, keyed by parcel number.
///
/// Implementations only move rows in and out; lifecycle rules live in
/// [`ParcelStore`](crate::application::parcel::ParcelStore).
pub trait ParcelRepository: Send + Sync {
    /// Insert a new row and return the number the backend assigned.
    fn insert(&self, parcel: &NewParcel) -> impl Future<Output = Result<ParcelNumber>> + Send;

    /// Fetch one row by number.
    fn find(&self, number: ParcelNumber) -> impl Future<Output = Result<Option<Parcel>>> + Send;

    /// Fetch every row owned by a client, ascending by number.
    fn find_by_client(&self, client: ClientId)
        -> impl Future<Output = Result<Vec<Parcel>>> + Send;

    /// Apply `changes` to one row. Returns the number of rows affected.
    ///
    /// With `require` set, only a row currently in that status is touched;
    /// the check and the write happen in a single statement.
    fn update(
        &self,
        number: ParcelNumber,
        changes: &ParcelChanges,
        require: Option<ParcelStatus>,
    ) -> impl Future<Output = Result<usize>> + Send;

    /// Delete one row. Returns the number of rows affected.
    ///
    /// `require` has the same meaning as in [`ParcelRepository::update`].
    fn delete(
        &self,
        number: ParcelNumber,
        require: Option<ParcelStatus>,
    ) -> impl Future<Output = Result<usize>> + Send;
}
