//! Snapshot persistence service.
//!
//! `SnapshotService` is the persistence half of the store's observer seam:
//! it loads the persisted overlay at startup and, once subscribed, writes the
//! full document back to durable storage after every mutation.
//!
//! Persistence is write-through and best-effort: a failed write is logged and
//! swallowed, leaving the store running memory-only until the next write
//! succeeds. A corrupt persisted snapshot is likewise logged and ignored so
//! the session starts from defaults instead of refusing to start.

use std::sync::Arc;

use zooscore_core::session::{
    SessionDocument, SessionStore, SnapshotOverlay, SnapshotStorage, StoreSubscriber, snapshot,
    snapshot_key,
};

use crate::config_service::ConfigService;

/// Loads and writes session snapshots under a fixed key.
pub struct SnapshotService {
    storage: Arc<dyn SnapshotStorage>,
    key: String,
}

impl SnapshotService {
    /// Creates a service persisting under `key` in `storage`.
    pub fn new(storage: Arc<dyn SnapshotStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Reads the persisted snapshot and decodes it into an overlay.
    ///
    /// Returns an empty overlay when nothing has been persisted yet, and also
    /// when the stored snapshot cannot be read or parsed; both failure cases
    /// are logged so the degradation is visible.
    pub fn load(&self) -> SnapshotOverlay {
        let stored = match self.storage.get(&self.key) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Failed to read snapshot '{}', starting fresh: {}", self.key, e);
                return SnapshotOverlay::default();
            }
        };

        let Some(stored) = stored else {
            return SnapshotOverlay::default();
        };

        match SnapshotOverlay::decode(&stored) {
            Ok(overlay) => overlay,
            Err(e) => {
                tracing::warn!(
                    "Corrupt snapshot under '{}', starting from defaults: {}",
                    self.key,
                    e
                );
                SnapshotOverlay::default()
            }
        }
    }
}

impl StoreSubscriber for SnapshotService {
    /// Serializes the whole document and overwrites the stored snapshot.
    fn document_changed(&self, document: &SessionDocument) {
        let encoded = match snapshot::encode(document) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!("Failed to encode snapshot: {}", e);
                return;
            }
        };

        match self.storage.set(&self.key, &encoded) {
            Ok(()) => tracing::debug!("Persisted snapshot under '{}'", self.key),
            Err(e) => {
                // Best-effort: the in-memory document stays authoritative
                tracing::warn!("Failed to persist snapshot under '{}': {}", self.key, e);
            }
        }
    }
}

/// Opens a session store backed by `storage`.
///
/// This is the canonical startup sequence: restore the persisted snapshot
/// onto a default document first, then subscribe the persistence service, so
/// restoring never rewrites the snapshot it was read from.
pub fn open_session_store(storage: Arc<dyn SnapshotStorage>, key_prefix: &str) -> SessionStore {
    let service = SnapshotService::new(storage, snapshot_key(key_prefix));
    let mut store = SessionStore::new();
    store.initialize(service.load());
    store.subscribe(Box::new(service));
    store
}

/// Opens a session store using the snapshot key prefix from the application
/// configuration.
///
/// Same startup sequence as [`open_session_store`], with the prefix taken
/// from [`ConfigService::get_config`] instead of being passed in by the
/// embedder.
pub fn open_configured_session_store(
    storage: Arc<dyn SnapshotStorage>,
    config_service: &ConfigService,
) -> SessionStore {
    let config = config_service.get_config();
    open_session_store(storage, &config.snapshot_key_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_storage::{JsonFileStorage, MemoryStorage};
    use tempfile::tempdir;
    use zooscore_core::error::{Result, ZooscoreError};
    use zooscore_core::game::CardName;
    use zooscore_core::session::{BotRound, CardSlots};

    /// Storage whose writes always fail, for the degraded-mode path.
    struct BrokenStorage;

    impl SnapshotStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(ZooscoreError::data_access("storage disabled"))
        }
    }

    fn bot_round(round: u32, bot: u32) -> BotRound {
        BotRound {
            round,
            bot,
            card_slots: CardSlots {
                slots: vec![CardName::Cards],
                upgraded_cards: vec![],
            },
            slot_number: 1,
            token_scoring_card_count: 3,
            token_notepad_count: 1,
            appeal_count: None,
        }
    }

    #[test]
    fn test_snapshot_matches_document_after_every_mutation() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = open_session_store(storage.clone(), "zooscore.");
        let key = snapshot_key("zooscore.");

        store.set_language("de".to_string());
        assert_snapshot_matches(&storage, &key, &store);

        store.record_bot_round(bot_round(2, 1));
        assert_snapshot_matches(&storage, &key, &store);

        store.set_font_scale(1.5);
        assert_snapshot_matches(&storage, &key, &store);

        store.end_game();
        assert_snapshot_matches(&storage, &key, &store);
    }

    fn assert_snapshot_matches(storage: &MemoryStorage, key: &str, store: &SessionStore) {
        let stored = storage.get(key).unwrap().expect("snapshot missing");
        let overlay = SnapshotOverlay::decode(&stored).unwrap();
        let mut reparsed = SessionDocument::default();
        overlay.apply_to(&mut reparsed);
        assert_eq!(&reparsed, store.document());
    }

    #[test]
    fn test_session_survives_reopen() {
        let storage: Arc<dyn SnapshotStorage> = Arc::new(MemoryStorage::new());

        {
            let mut store = open_session_store(storage.clone(), "zooscore.");
            store.set_language("fr".to_string());
            store.record_bot_round(bot_round(1, 1));
        }

        let reopened = open_session_store(storage, "zooscore.");
        assert_eq!(reopened.document().language, "fr");
        assert_eq!(reopened.document().rounds[&1].bot_rounds[&1], bot_round(1, 1));
    }

    #[test]
    fn test_session_survives_reopen_on_disk() {
        let dir = tempdir().unwrap();
        let storage: Arc<dyn SnapshotStorage> = Arc::new(JsonFileStorage::new(dir.path()));

        {
            let mut store = open_session_store(storage.clone(), "zooscore.");
            store.set_zoo_map("map-a".to_string());
        }

        let reopened = open_session_store(storage, "zooscore.");
        assert_eq!(reopened.document().setup.zoo_map.as_deref(), Some("map-a"));
    }

    #[test]
    fn test_open_with_no_snapshot_yields_defaults() {
        let storage = Arc::new(MemoryStorage::new());
        let store = open_session_store(storage.clone(), "zooscore.");
        assert_eq!(store.document(), &SessionDocument::default());
        // Opening alone must not write anything
        assert!(storage.get(&snapshot_key("zooscore.")).unwrap().is_none());
    }

    #[test]
    fn test_configured_prefix_reaches_the_snapshot_key() {
        let config_service = ConfigService::new();
        let expected_key = snapshot_key(&config_service.get_config().snapshot_key_prefix);

        let storage = Arc::new(MemoryStorage::new());
        let mut store = open_configured_session_store(storage.clone(), &config_service);
        store.set_language("de".to_string());

        assert!(storage.get(&expected_key).unwrap().is_some());
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_defaults() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(&snapshot_key("zooscore."), "not json {").unwrap();

        let store = open_session_store(storage, "zooscore.");
        assert_eq!(store.document(), &SessionDocument::default());
    }

    #[test]
    fn test_write_failure_degrades_to_memory_only() {
        let storage = Arc::new(BrokenStorage);
        let mut store = open_session_store(storage, "zooscore.");

        // The mutation itself still succeeds
        store.set_language("de".to_string());
        assert_eq!(store.document().language, "de");
    }
}
