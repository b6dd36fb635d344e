//! Game domain value types.
//!
//! These enums are consumed as opaque values by the session model and are
//! persisted verbatim inside snapshots, so their serialized names are part of
//! the stored format and must stay stable.

use serde::{Deserialize, Serialize};

/// The bot's action cards, identified by name.
///
/// Each bot tracks which cards sit in its action row and which of them have
/// been upgraded over the course of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardName {
    /// Play animal cards from the hand.
    Animals,
    /// Build enclosures and zoo structures.
    Build,
    /// Draw and snap up new cards.
    Cards,
    /// Perform association worker actions.
    Association,
    /// Play sponsor cards.
    Sponsors,
}

/// Player (and bot) board colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerColor {
    Blue,
    Red,
    Yellow,
    Black,
}

/// Bot difficulty tiers, from beginner to expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    /// Tier 1: beginner.
    #[serde(rename = "L1_BEGINNER")]
    L1Beginner,
    /// Tier 2: easy.
    #[serde(rename = "L2_EASY")]
    L2Easy,
    /// Tier 3: medium.
    #[serde(rename = "L3_MEDIUM")]
    L3Medium,
    /// Tier 4: hard.
    #[serde(rename = "L4_HARD")]
    L4Hard,
    /// Tier 5: expert.
    #[serde(rename = "L5_EXPERT")]
    L5Expert,
}

/// Presets controlling how the bot's action cards are distributed across the
/// five strength slots at setup.
///
/// The variant name encodes the percentage weight assigned to each slot, from
/// slot 1 to slot 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionCardDistributionSchema {
    /// Uniform over slots 2-5, nothing on slot 1.
    #[serde(rename = "P0_25_25_25_25")]
    P0_25_25_25_25,
    /// Weighted toward the strong slots, nothing on slot 1.
    #[serde(rename = "P0_10_20_30_40")]
    P0_10_20_30_40,
    /// Uniform over all five slots.
    #[serde(rename = "P20_20_20_20_20")]
    P20_20_20_20_20,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_name_serialized_as_screaming_snake_case() {
        let json = serde_json::to_string(&CardName::Association).unwrap();
        assert_eq!(json, "\"ASSOCIATION\"");
    }

    #[test]
    fn test_difficulty_level_round_trips_through_stored_name() {
        let json = serde_json::to_string(&DifficultyLevel::L1Beginner).unwrap();
        assert_eq!(json, "\"L1_BEGINNER\"");
        let level: DifficultyLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(level, DifficultyLevel::L1Beginner);
    }

    #[test]
    fn test_distribution_schema_stored_name() {
        let json = serde_json::to_string(&ActionCardDistributionSchema::P0_25_25_25_25).unwrap();
        assert_eq!(json, "\"P0_25_25_25_25\"");
    }
}
