//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Opaque string identifier handed in by whatever manages the room or lobby.
//!
//! ## PlayerMap
//!
//! Per-player data keyed by `PlayerId`, backed by a persistent ordered map so
//! cloning a game state is O(1) and iteration order is stable.

use std::borrow::Borrow;
use std::ops::Index;

use im::OrdMap;
use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Serializes as a bare string so it can key JSON objects.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&PlayerId> for PlayerId {
    fn from(id: &PlayerId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for PlayerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Per-player data storage.
///
/// ## Example
///
/// ```
/// use party_games::core::{PlayerId, PlayerMap};
///
/// let dice: PlayerMap<u8> = PlayerMap::new(["a", "b"].map(PlayerId::from), |_| 5);
///
/// assert_eq!(dice["a"], 5);
/// assert_eq!(dice.len(), 2);
/// assert!(dice.get("c").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T: Clone> {
    data: OrdMap<PlayerId, T>,
}

impl<T: Clone> PlayerMap<T> {
    /// Create a map with one entry per player, built by a factory function.
    ///
    /// Repeated ids collapse into a single entry.
    pub fn new(players: impl IntoIterator<Item = PlayerId>, factory: impl Fn(&PlayerId) -> T) -> Self {
        let data = players
            .into_iter()
            .map(|id| {
                let value = factory(&id);
                (id, value)
            })
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if there are no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if a player has an entry.
    #[must_use]
    pub fn contains(&self, player: &str) -> bool {
        self.data.contains_key(player)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: &str) -> Option<&T> {
        self.data.get(player)
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: &str) -> Option<&mut T> {
        self.data.get_mut(player)
    }

    /// Iterate over (PlayerId, &T) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &T)> {
        self.data.iter()
    }

    /// Iterate over all player IDs in id order.
    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.data.keys()
    }
}

impl<T: Clone> FromIterator<(PlayerId, T)> for PlayerMap<T> {
    /// Later entries replace earlier ones with the same id.
    fn from_iter<I: IntoIterator<Item = (PlayerId, T)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Index<&str> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: &str) -> &Self::Output {
        match self.data.get(player) {
            Some(value) => value,
            None => panic!("no entry for player {player}"),
        }
    }
}

impl<T: Clone> Index<&PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: &PlayerId) -> &Self::Output {
        &self[player.as_str()]
    }
}
