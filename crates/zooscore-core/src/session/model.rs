//! Session document domain models.
//!
//! Contains the state that persists across application restarts: the session
//! setup chosen at the start of a game, the per-round per-bot scoring records,
//! and a couple of UI preferences.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game::{ActionCardDistributionSchema, CardName, DifficultyLevel, PlayerColor};

/// The root session state, persisted as a whole after every mutation.
///
/// Rounds are keyed by their 1-based round number. Recording round N before
/// round N-1 simply leaves the earlier key absent; there are no placeholder
/// entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDocument {
    /// UI language code (e.g. "en", "de").
    pub language: String,
    /// Font scale factor applied by the UI.
    pub base_font_size: f64,
    /// Game setup chosen when the session was created.
    pub setup: Setup,
    /// Per-round scoring records, keyed by 1-based round number.
    #[serde(default)]
    pub rounds: BTreeMap<u32, Round>,
}

impl Default for SessionDocument {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            base_font_size: 1.0,
            setup: Setup::default(),
            rounds: BTreeMap::new(),
        }
    }
}

impl SessionDocument {
    /// Creates a new document with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a bot's record for its round, creating the round container if
    /// this is the first record for that round. Records for other rounds and
    /// other bots are left untouched.
    pub fn record_bot_round(&mut self, bot_round: BotRound) {
        let round = self
            .rounds
            .entry(bot_round.round)
            .or_insert_with(|| Round::new(bot_round.round));
        round.bot_rounds.insert(bot_round.bot, bot_round);
    }
}

/// Game setup: who plays, against how many bots, and with which presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setup {
    /// Player and bot counts plus the seating order of colors.
    pub player_setup: PlayerSetup,
    /// Bot difficulty tier.
    pub difficulty_level: DifficultyLevel,
    /// Identifier of the zoo map in play. None until the player picks one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoo_map: Option<String>,
    /// Preset controlling the bot's action-card distribution.
    pub action_card_distribution: ActionCardDistributionSchema,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            player_setup: PlayerSetup::default(),
            difficulty_level: DifficultyLevel::L1Beginner,
            zoo_map: None,
            action_card_distribution: ActionCardDistributionSchema::P0_25_25_25_25,
        }
    }
}

/// Player counts and the ordered sequence of colors in seating order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSetup {
    /// Number of human players.
    pub player_count: u32,
    /// Number of bot opponents.
    pub bot_count: u32,
    /// Colors in seating order, humans first.
    pub player_colors: Vec<PlayerColor>,
}

impl Default for PlayerSetup {
    fn default() -> Self {
        Self {
            player_count: 1,
            bot_count: 1,
            player_colors: vec![
                PlayerColor::Blue,
                PlayerColor::Red,
                PlayerColor::Yellow,
                PlayerColor::Black,
            ],
        }
    }
}

/// One play cycle of the game, holding the records of every bot that has
/// finished its turn in that cycle so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// 1-based round number.
    pub round: u32,
    /// Records keyed by 1-based bot number. Bots that have not played this
    /// round yet are simply absent.
    #[serde(default)]
    pub bot_rounds: BTreeMap<u32, BotRound>,
}

impl Round {
    /// Creates an empty round container.
    pub fn new(round: u32) -> Self {
        Self {
            round,
            bot_rounds: BTreeMap::new(),
        }
    }
}

/// The recorded state of one bot within a single round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotRound {
    /// 1-based round number this record belongs to.
    pub round: u32,
    /// 1-based bot number this record belongs to.
    pub bot: u32,
    /// The bot's action row at the end of its turn.
    pub card_slots: CardSlots,
    /// Strength slot of the action the bot took.
    pub slot_number: u32,
    /// Tokens placed on the bot's scoring card.
    pub token_scoring_card_count: u32,
    /// Tokens noted on the bot's notepad.
    pub token_notepad_count: u32,
    /// Appeal gained this round. None when not applicable at this difficulty,
    /// which is distinct from a recorded zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appeal_count: Option<u32>,
}

/// A bot's action row: which cards occupy the slots and which of them have
/// been upgraded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSlots {
    /// Cards in slot order, weakest first.
    pub slots: Vec<CardName>,
    /// Cards currently flipped to their upgraded side.
    pub upgraded_cards: Vec<CardName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot_round(round: u32, bot: u32, slot_number: u32) -> BotRound {
        BotRound {
            round,
            bot,
            card_slots: CardSlots {
                slots: vec![CardName::Animals, CardName::Build],
                upgraded_cards: vec![],
            },
            slot_number,
            token_scoring_card_count: 0,
            token_notepad_count: 0,
            appeal_count: None,
        }
    }

    #[test]
    fn test_default_document() {
        let document = SessionDocument::default();
        assert_eq!(document.language, "en");
        assert_eq!(document.base_font_size, 1.0);
        assert_eq!(document.setup.player_setup.player_count, 1);
        assert_eq!(document.setup.player_setup.bot_count, 1);
        assert_eq!(
            document.setup.player_setup.player_colors,
            vec![
                PlayerColor::Blue,
                PlayerColor::Red,
                PlayerColor::Yellow,
                PlayerColor::Black
            ]
        );
        assert_eq!(document.setup.difficulty_level, DifficultyLevel::L1Beginner);
        assert!(document.setup.zoo_map.is_none());
        assert_eq!(
            document.setup.action_card_distribution,
            ActionCardDistributionSchema::P0_25_25_25_25
        );
        assert!(document.rounds.is_empty());
    }

    #[test]
    fn test_record_bot_round_creates_round_container() {
        let mut document = SessionDocument::new();
        document.record_bot_round(bot_round(2, 1, 3));

        // Round 2 exists, round 1 was never created
        assert!(document.rounds.contains_key(&2));
        assert!(!document.rounds.contains_key(&1));
        let round = &document.rounds[&2];
        assert_eq!(round.round, 2);
        assert_eq!(round.bot_rounds[&1].slot_number, 3);
    }

    #[test]
    fn test_record_bot_round_preserves_other_bots() {
        let mut document = SessionDocument::new();
        document.record_bot_round(bot_round(1, 1, 2));
        document.record_bot_round(bot_round(1, 2, 5));

        let round = &document.rounds[&1];
        assert_eq!(round.bot_rounds.len(), 2);
        assert_eq!(round.bot_rounds[&1].slot_number, 2);
        assert_eq!(round.bot_rounds[&2].slot_number, 5);
    }

    #[test]
    fn test_record_bot_round_overwrites_same_index() {
        let mut document = SessionDocument::new();
        document.record_bot_round(bot_round(1, 1, 2));
        document.record_bot_round(bot_round(1, 1, 4));

        let round = &document.rounds[&1];
        assert_eq!(round.bot_rounds.len(), 1);
        assert_eq!(round.bot_rounds[&1].slot_number, 4);
    }

    #[test]
    fn test_zoo_map_absent_when_unset() {
        let document = SessionDocument::default();
        let json = serde_json::to_string(&document).unwrap();
        assert!(!json.contains("zooMap"));
    }
}
