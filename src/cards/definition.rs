//! Card definitions - static card data.
//!
//! A `Card` is the full description of one catalog entry. Decks, hands and
//! fields hold copies of these values; nothing about a card changes during
//! setup.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ```
/// use party_games::cards::{Card, CardId};
///
/// let card = Card::new(CardId::new(9), "Test Card", 2, 3);
/// assert_eq!(card.name, "Test Card");
/// assert_eq!(card.attack, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Display name. Catalog entries borrow a `'static` string.
    pub name: Cow<'static, str>,

    pub attack: u32,

    pub defense: u32,
}

impl Card {
    /// Create a card with a borrowed static name (usable in constants).
    #[must_use]
    pub const fn new(id: CardId, name: &'static str, attack: u32, defense: u32) -> Self {
        Self {
            id,
            name: Cow::Borrowed(name),
            attack,
            defense,
        }
    }
}
