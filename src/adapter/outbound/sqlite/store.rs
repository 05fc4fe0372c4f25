//! SQLite parcel repository implementation.
//!
//! Provides persistent storage for parcels using SQLite and Diesel ORM.

use chrono::{DateTime, SecondsFormat, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::SqliteConnection;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{NewParcelRow, ParcelChangeset, ParcelRow};
use crate::adapter::outbound::sqlite::database::schema::parcel;
use crate::domain::{ClientId, NewParcel, Parcel, ParcelChanges, ParcelNumber, ParcelStatus};
use crate::error::{PersistenceError, Result};
use crate::port::outbound::store::ParcelRepository;

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    #[diesel(column_name = "id")]
    id: i64,
}

/// SQLite-backed parcel repository.
///
/// Implements the [`ParcelRepository`] trait over a shared connection pool.
/// Guarded writes are single `UPDATE`/`DELETE` statements filtered on both
/// number and status.
#[derive(Clone)]
pub struct SqliteParcelRepository {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteParcelRepository {
    /// Create a new SQLite parcel repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn connection(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
        self.pool
            .get()
            .map_err(|e| PersistenceError::Connection(e.to_string()).into())
    }

    fn to_row(parcel: &NewParcel) -> NewParcelRow {
        NewParcelRow {
            client: parcel.client.get(),
            status: parcel.status.as_str().to_string(),
            address: parcel.address.clone(),
            created_at: parcel.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    fn to_changeset(changes: &ParcelChanges) -> ParcelChangeset {
        ParcelChangeset {
            status: changes.status.map(|status| status.as_str().to_string()),
            address: changes.address.clone(),
        }
    }

    fn from_row(row: ParcelRow) -> Result<Parcel> {
        // Guarded writes compare the stored text exactly, so decoding must too.
        let status =
            ParcelStatus::from_tag(&row.status).ok_or_else(|| PersistenceError::Corrupt {
                column: "status",
                reason: format!("unknown status tag '{}'", row.status),
            })?;
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| PersistenceError::Corrupt {
                column: "created_at",
                reason: e.to_string(),
            })?
            .with_timezone(&Utc);

        Ok(Parcel {
            number: ParcelNumber::new(row.number),
            client: ClientId::new(row.client),
            status,
            address: row.address,
            created_at,
        })
    }
}

impl ParcelRepository for SqliteParcelRepository {
    async fn insert(&self, new_parcel: &NewParcel) -> Result<ParcelNumber> {
        let row = Self::to_row(new_parcel);
        let mut conn = self.connection()?;

        let id = conn.transaction(|conn| {
            diesel::insert_into(parcel::table)
                .values(&row)
                .execute(conn)?;

            diesel::sql_query("SELECT last_insert_rowid() AS id")
                .get_result::<LastInsertRowId>(conn)
                .map(|row| row.id)
        })?;

        Ok(ParcelNumber::new(id))
    }

    async fn find(&self, number: ParcelNumber) -> Result<Option<Parcel>> {
        let mut conn = self.connection()?;

        let row: Option<ParcelRow> = parcel::table
            .find(number.get())
            .select(ParcelRow::as_select())
            .first(&mut conn)
            .optional()?;

        row.map(Self::from_row).transpose()
    }

    async fn find_by_client(&self, client: ClientId) -> Result<Vec<Parcel>> {
        let mut conn = self.connection()?;

        let rows: Vec<ParcelRow> = parcel::table
            .filter(parcel::client.eq(client.get()))
            .order(parcel::number.asc())
            .select(ParcelRow::as_select())
            .load(&mut conn)?;

        rows.into_iter().map(Self::from_row).collect()
    }

    async fn update(
        &self,
        number: ParcelNumber,
        changes: &ParcelChanges,
        require: Option<ParcelStatus>,
    ) -> Result<usize> {
        let changeset = Self::to_changeset(changes);
        let mut conn = self.connection()?;

        let target = parcel::table.filter(parcel::number.eq(number.get()));
        let updated = match require {
            Some(status) => diesel::update(target.filter(parcel::status.eq(status.as_str())))
                .set(&changeset)
                .execute(&mut conn)?,
            None => diesel::update(target).set(&changeset).execute(&mut conn)?,
        };

        Ok(updated)
    }

    async fn delete(&self, number: ParcelNumber, require: Option<ParcelStatus>) -> Result<usize> {
        let mut conn = self.connection()?;

        let target = parcel::table.filter(parcel::number.eq(number.get()));
        let deleted = match require {
            Some(status) => diesel::delete(target.filter(parcel::status.eq(status.as_str())))
                .execute(&mut conn)?,
            None => diesel::delete(target).execute(&mut conn)?,
        };

        Ok(deleted)
    }
}
