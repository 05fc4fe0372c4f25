//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`] - In-memory [`ParcelRepository`](crate::port::ParcelRepository)
//!   with switchable backend failure.
//! - [`domain`] - Builders for parcels and fixed timestamps.

pub mod domain;
pub mod store;

pub use store::InMemoryParcelRepository;
