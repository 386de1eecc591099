//! The fixed card catalog both players build their decks from.
//!
//! The table is a `static`: setup copies entries out of it and never writes
//! back.

use super::definition::{Card, CardId};

/// Every card in the game, in id order.
pub static CATALOG: [Card; 6] = [
    Card::new(CardId::new(1), "Goblin Raider", 3, 1),
    Card::new(CardId::new(2), "Stone Golem", 1, 5),
    Card::new(CardId::new(3), "Fire Imp", 4, 2),
    Card::new(CardId::new(4), "Elven Archer", 2, 2),
    Card::new(CardId::new(5), "Iron Knight", 3, 4),
    Card::new(CardId::new(6), "Storm Drake", 5, 3),
];

/// Look up a catalog entry by id.
#[must_use]
pub fn find(id: CardId) -> Option<&'static Card> {
    CATALOG.iter().find(|card| card.id == id)
}
