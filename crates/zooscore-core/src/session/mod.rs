//! Session domain module.
//!
//! This module contains the session document model, the mutable store that
//! owns it, and the snapshot machinery that persists it across restarts.
//!
//! # Module Structure
//!
//! - `model`: the session document and its parts (`SessionDocument`, `Setup`,
//!   `PlayerSetup`, `Round`, `BotRound`, `CardSlots`)
//! - `store`: `SessionStore` with its named mutations and the
//!   `StoreSubscriber` change-notification seam
//! - `snapshot`: full-document snapshot encoding and the top-level overlay
//!   used to restore a persisted session onto defaults
//! - `repository`: the `SnapshotStorage` trait for durable key-value storage

mod model;
pub mod repository;
pub mod snapshot;
mod store;

// Re-export public API
pub use model::{BotRound, CardSlots, PlayerSetup, Round, SessionDocument, Setup};
pub use repository::SnapshotStorage;
pub use snapshot::{SnapshotOverlay, snapshot_key};
pub use store::{SessionStore, StoreSubscriber};
