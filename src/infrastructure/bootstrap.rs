//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::info;

use crate::adapter::outbound::sqlite::database::connection::open;
use crate::adapter::outbound::sqlite::store::SqliteParcelRepository;
use crate::application::parcel::ParcelStore;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Parcel store backed by the SQLite adapter.
pub type SqliteParcelStore = ParcelStore<SqliteParcelRepository>;

/// Open the configured database, apply migrations and build the store.
///
/// # Errors
/// Returns a persistence error if the database cannot be opened or migrated.
pub fn build_parcel_store(config: &Config) -> Result<SqliteParcelStore> {
    let pool = open(&config.database)?;
    info!(database = %config.database.url, "Database ready");
    Ok(ParcelStore::new(SqliteParcelRepository::new(pool)))
}
