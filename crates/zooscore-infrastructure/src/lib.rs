pub mod config_service;
pub mod json_storage;
pub mod paths;
pub mod snapshot_service;

pub use crate::config_service::{ConfigService, StoreConfig};
pub use crate::json_storage::{JsonFileStorage, MemoryStorage};
pub use crate::snapshot_service::{
    SnapshotService, open_configured_session_store, open_session_store,
};
