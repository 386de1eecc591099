//! Input validation errors.

use thiserror::Error;

use super::player::PlayerId;

/// Rejected setup or bid input.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("at least one player is required")]
    EmptyRoster,

    #[error("player {0} appears more than once")]
    DuplicatePlayer(PlayerId),

    #[error("first player {0} is not in the roster")]
    UnknownFirstPlayer(PlayerId),

    #[error("both seats are taken by player {0}")]
    SamePlayer(PlayerId),

    #[error("hand size {hand_size} exceeds the {catalog_size}-card catalog")]
    HandLargerThanCatalog { hand_size: usize, catalog_size: usize },

    #[error("players must start with at least one die")]
    ZeroStartingDice,

    #[error("a bid must claim at least one die")]
    BidQuantity,

    #[error("bid face {0} is not between 1 and 6")]
    BidFace(u8),
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;
