//! Game configuration types.
//!
//! Setup reads its numbers from these configs rather than hardcoding them:
//! - `DiceGameConfig`: dice each player starts Liar's Dice with
//! - `CardGameConfig`: cards drawn into each opening hand
//!
//! Both deserialize from partial input; missing fields take the defaults.

use serde::{Deserialize, Serialize};

use super::error::{InvalidArgument, Result};
use crate::cards::CATALOG;

/// Dice every player holds at the start of a Liar's Dice game.
pub const DEFAULT_STARTING_DICE: u8 = 5;

/// Cards drawn into each opening hand.
pub const DEFAULT_HAND_SIZE: usize = 3;

/// Liar's Dice setup configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiceGameConfig {
    /// Dice each player starts with.
    pub starting_dice: u8,
}

impl Default for DiceGameConfig {
    fn default() -> Self {
        Self {
            starting_dice: DEFAULT_STARTING_DICE,
        }
    }
}

impl DiceGameConfig {
    #[must_use]
    pub fn with_starting_dice(mut self, dice: u8) -> Self {
        self.starting_dice = dice;
        self
    }

    /// Check the config describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.starting_dice == 0 {
            return Err(InvalidArgument::ZeroStartingDice);
        }
        Ok(())
    }
}

/// Card battle setup configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardGameConfig {
    /// Cards moved from the shuffled deck into each opening hand.
    pub hand_size: usize,
}

impl Default for CardGameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl CardGameConfig {
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Check the hand can be drawn from the catalog.
    pub fn validate(&self) -> Result<()> {
        if self.hand_size > CATALOG.len() {
            return Err(InvalidArgument::HandLargerThanCatalog {
                hand_size: self.hand_size,
                catalog_size: CATALOG.len(),
            });
        }
        Ok(())
    }
}
