//! Card battle state types.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};

/// One player's cards.
///
/// Uses `im::Vector` so cloning the state for a speculative move is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCardState {
    /// Draw pile, top card first.
    pub deck: Vector<Card>,
    pub hand: Vector<Card>,
    /// Cards in play.
    pub field: Vector<Card>,
}

impl PlayerCardState {
    /// Cards the player holds outside the field.
    #[must_use]
    pub fn cards_held(&self) -> usize {
        self.deck.len() + self.hand.len()
    }
}

/// Full card battle game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardGameState {
    pub players: PlayerMap<PlayerCardState>,
    pub current_player: PlayerId,
    pub turn: u32,
}

impl CardGameState {
    /// Get a player's cards.
    #[must_use]
    pub fn player(&self, id: &str) -> Option<&PlayerCardState> {
        self.players.get(id)
    }
}
