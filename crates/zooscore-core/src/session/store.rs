//! The session store and its change-notification seam.

use crate::game::{ActionCardDistributionSchema, DifficultyLevel};
use crate::session::model::{BotRound, PlayerSetup, SessionDocument};
use crate::session::snapshot::SnapshotOverlay;

/// Observer of session document changes.
///
/// Subscribers are notified synchronously after every mutation, with the
/// mutation already applied. The persistence layer implements this trait to
/// write a snapshot after each change; the store itself never touches
/// storage.
pub trait StoreSubscriber: Send + Sync {
    /// Called after a mutation has been applied to the document.
    fn document_changed(&self, document: &SessionDocument);
}

/// The central state holder for one game session.
///
/// `SessionStore` owns the [`SessionDocument`] and exposes a fixed set of
/// named mutations. It is an explicitly constructed value: the application's
/// composition root creates one, restores it from a persisted snapshot, and
/// passes it to consumers. There is no ambient global instance.
///
/// Mutations are infallible and run to completion before returning; inputs
/// are assumed well-formed by the calling layer. Every mutation except
/// [`initialize`](Self::initialize) notifies all subscribers before the call
/// returns, so a subscribing persister makes the durable copy catch up with
/// the in-memory document synchronously.
#[derive(Default)]
pub struct SessionStore {
    document: SessionDocument,
    subscribers: Vec<Box<dyn StoreSubscriber>>,
}

impl SessionStore {
    /// Creates a store holding a default document with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current document.
    pub fn document(&self) -> &SessionDocument {
        &self.document
    }

    /// Registers a subscriber to be notified after every subsequent mutation.
    pub fn subscribe(&mut self, subscriber: Box<dyn StoreSubscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Overlays a persisted snapshot onto the current document; persisted
    /// fields win, absent fields keep their current values.
    ///
    /// Does not notify subscribers: the composition root restores the store
    /// before subscribing the persister, so restoring never rewrites the
    /// snapshot it was just read from.
    pub fn initialize(&mut self, overlay: SnapshotOverlay) {
        overlay.apply_to(&mut self.document);
    }

    /// Replaces the UI language.
    pub fn set_language(&mut self, language: String) {
        self.document.language = language;
        self.notify_changed();
    }

    /// Replaces the player setup wholesale.
    pub fn set_player_setup(&mut self, player_setup: PlayerSetup) {
        self.document.setup.player_setup = player_setup;
        self.notify_changed();
    }

    /// Replaces the bot difficulty tier.
    pub fn set_difficulty_level(&mut self, level: DifficultyLevel) {
        self.document.setup.difficulty_level = level;
        self.notify_changed();
    }

    /// Replaces the action-card distribution preset.
    pub fn set_action_card_distribution(&mut self, schema: ActionCardDistributionSchema) {
        self.document.setup.action_card_distribution = schema;
        self.notify_changed();
    }

    /// Selects the zoo map in play.
    pub fn set_zoo_map(&mut self, zoo_map: String) {
        self.document.setup.zoo_map = Some(zoo_map);
        self.notify_changed();
    }

    /// Upserts one bot's record for its round. Creates the round container if
    /// this is the first record for that round; records at other (round, bot)
    /// indices are untouched. Applying the same record twice is a no-op the
    /// second time.
    pub fn record_bot_round(&mut self, bot_round: BotRound) {
        self.document.record_bot_round(bot_round);
        self.notify_changed();
    }

    /// Ends the game: clears all round records. Setup and UI preferences are
    /// kept so a rematch starts from the same configuration.
    pub fn end_game(&mut self) {
        self.document.rounds.clear();
        self.notify_changed();
    }

    /// Replaces the UI font scale.
    pub fn set_font_scale(&mut self, base_font_size: f64) {
        self.document.base_font_size = base_font_size;
        self.notify_changed();
    }

    fn notify_changed(&self) {
        for subscriber in &self.subscribers {
            subscriber.document_changed(&self.document);
        }
    }
}
