//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::parcel;

/// Database row for a parcel (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = parcel)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ParcelRow {
    pub number: i64,
    pub client: i64,
    pub status: String,
    pub address: String,
    pub created_at: String,
}

/// Database row for a parcel (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = parcel)]
pub struct NewParcelRow {
    pub client: i64,
    pub status: String,
    pub address: String,
    pub created_at: String,
}

/// Partial update of a parcel row. `None` columns are left untouched.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = parcel)]
pub struct ParcelChangeset {
    pub status: Option<String>,
    pub address: Option<String>,
}
