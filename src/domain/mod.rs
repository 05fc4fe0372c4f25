//! Storage-agnostic parcel types: identifiers, records, statuses and the
//! lifecycle rules attached to them.

pub mod error;
pub mod id;
pub mod parcel;

pub use error::DomainError;
pub use id::{ClientId, ParcelNumber};
pub use parcel::{NewParcel, Parcel, ParcelChanges, ParcelStatus};
