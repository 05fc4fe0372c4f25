//! Parcel tracker - register parcels and follow them through delivery.
//!
//! A parcel belongs to a client, carries a delivery address and moves
//! through `registered`, `sent` and `delivered`. While a parcel is still
//! registered its address may change and it may be deleted; afterwards
//! both operations are refused.
//!
//! # Architecture
//!
//! - [`domain`] - Parcels, identifiers, statuses and lifecycle rules
//! - [`port`] - The storage contract the application depends on
//! - [`application`] - [`application::parcel::ParcelStore`], the use cases
//! - [`adapter`] - SQLite persistence (Diesel) and the command-line interface
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use parcel_tracker::domain::{ClientId, ParcelStatus};
//! use parcel_tracker::infrastructure::bootstrap::build_parcel_store;
//! use parcel_tracker::infrastructure::config::Config;
//!
//! # async fn demo() -> parcel_tracker::error::Result<()> {
//! let store = build_parcel_store(&Config::default())?;
//! let number = store.register(ClientId::new(1000), "123 Main St").await?;
//! store.set_status(number, ParcelStatus::Sent).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
