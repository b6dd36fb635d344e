//! Board-game domain module.
//!
//! This module contains the enumerated value types the session model is built
//! from: bot action cards, player colors, difficulty tiers, and the presets
//! controlling how action cards are distributed at setup.

mod model;

// Re-export public API
pub use model::{ActionCardDistributionSchema, CardName, DifficultyLevel, PlayerColor};
