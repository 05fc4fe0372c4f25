//! SQLite persistence adapter.
//!
//! Provides the SQLite-backed [`ParcelRepository`](crate::port::ParcelRepository)
//! implementation, connection pooling and embedded migrations using Diesel ORM.

pub mod database;
pub mod settings;
pub mod store;

pub use database::connection::{create_pool, open, run_migrations, DbPool};
pub use settings::DatabaseConfig;
pub use store::SqliteParcelRepository;
