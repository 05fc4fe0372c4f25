//! In-memory [`ParcelRepository`] for tests.
//!
//! Rows live in a `BTreeMap` behind a mutex, so iteration order is ascending
//! by number like the SQLite adapter. Numbers are assigned from a counter
//! that never reuses a value, matching `AUTOINCREMENT`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::domain::{ClientId, NewParcel, Parcel, ParcelChanges, ParcelNumber, ParcelStatus};
use crate::error::{PersistenceError, Result};
use crate::port::outbound::store::ParcelRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<ParcelNumber, Parcel>,
    last_number: i64,
}

/// A repository that keeps parcels in process memory.
#[derive(Default)]
pub struct InMemoryParcelRepository {
    table: Mutex<Table>,
    unavailable: AtomicBool,
}

impl InMemoryParcelRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a connection error (or succeed
    /// again when `false`).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.table.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(PersistenceError::Connection("backend unavailable".into()).into());
        }
        Ok(())
    }
}

fn matches_requirement(parcel: &Parcel, require: Option<ParcelStatus>) -> bool {
    require.map_or(true, |status| parcel.status == status)
}

impl ParcelRepository for InMemoryParcelRepository {
    async fn insert(&self, parcel: &NewParcel) -> Result<ParcelNumber> {
        self.check_available()?;
        let mut table = self.table.lock();
        table.last_number += 1;
        let number = ParcelNumber::new(table.last_number);
        table.rows.insert(number, parcel.clone().into_parcel(number));
        Ok(number)
    }

    async fn find(&self, number: ParcelNumber) -> Result<Option<Parcel>> {
        self.check_available()?;
        Ok(self.table.lock().rows.get(&number).cloned())
    }

    async fn find_by_client(&self, client: ClientId) -> Result<Vec<Parcel>> {
        self.check_available()?;
        Ok(self
            .table
            .lock()
            .rows
            .values()
            .filter(|parcel| parcel.client == client)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        number: ParcelNumber,
        changes: &ParcelChanges,
        require: Option<ParcelStatus>,
    ) -> Result<usize> {
        self.check_available()?;
        if changes.is_empty() {
            return Err(PersistenceError::Database("no changes to save".into()).into());
        }
        let mut table = self.table.lock();
        match table.rows.get_mut(&number) {
            Some(parcel) if matches_requirement(parcel, require) => {
                changes.apply_to(parcel);
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete(&self, number: ParcelNumber, require: Option<ParcelStatus>) -> Result<usize> {
        self.check_available()?;
        let mut table = self.table.lock();
        let matched = table
            .rows
            .get(&number)
            .is_some_and(|parcel| matches_requirement(parcel, require));
        if matched {
            table.rows.remove(&number);
            return Ok(1);
        }
        Ok(0)
    }
}
