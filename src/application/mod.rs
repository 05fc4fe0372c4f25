//! Application services (use cases).
//!
//! These services orchestrate domain rules and coordinate the storage
//! port to implement the parcel lifecycle.

pub mod parcel;
