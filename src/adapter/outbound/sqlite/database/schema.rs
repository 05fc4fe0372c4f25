// Mirrors migrations/2024-01-15-000000_create_parcel/up.sql.
// INTEGER columns are 64-bit in SQLite.

diesel::table! {
    parcel (number) {
        number -> BigInt,
        client -> BigInt,
        status -> Text,
        address -> Text,
        created_at -> Text,
    }
}
