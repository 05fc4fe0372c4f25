//! Builders for parcel fixtures.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{ClientId, NewParcel};

/// A fixed, whole-second creation time for deterministic fixtures.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// A registered parcel for `client` created at [`fixed_time`].
pub fn new_parcel(client: i64, address: &str) -> NewParcel {
    NewParcel::register_at(ClientId::new(client), address, fixed_time())
}
