//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points of the tracker. Adapters implement
//! them to plug in a concrete persistence backend.
//!
//! ```text
//!     ┌──────────────┐       ┌─────────────────────┐
//!     │     CLI      │──────▶│  application::      │
//!     │   Adapter    │       │  ParcelStore        │
//!     └──────────────┘       └──────────┬──────────┘
//!                                       │ ParcelRepository
//!                            ┌──────────▼──────────┐
//!                            │   SQLite Adapter    │
//!                            └─────────────────────┘
//! ```

pub mod outbound;

pub use outbound::store::ParcelRepository;
