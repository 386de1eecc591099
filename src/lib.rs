//! # party-games
//!
//! Opening-state construction for two party games played in a shared room.
//!
//! ## Design Principles
//!
//! 1. **State Only**: Setup functions return plain data. Bidding, challenges,
//!    card play and turn advancement belong to the caller.
//!
//! 2. **Total Constructors**: The setup functions never fail. Checked `try_*`
//!    variants reject malformed rosters with [`InvalidArgument`].
//!
//! 3. **Injectable Randomness**: Deck shuffling goes through the [`Shuffle`]
//!    trait so a seeded [`GameRng`] or a test stub fixes the outcome.
//!
//! ## Modules
//!
//! - `core`: Player IDs, per-player maps, RNG, configuration, errors
//! - `cards`: Card definitions and the static catalog
//! - `games`: Liar's Dice and the card battle
//!
//! ## Example
//!
//! ```
//! use party_games::{create_initial_card_game_state, create_initial_dice_game_state};
//!
//! let dice = create_initial_dice_game_state(["a", "b", "c"], "b");
//! assert_eq!(dice.total_dice(), 15);
//!
//! let cards = create_initial_card_game_state("p1", "p2");
//! assert_eq!(cards.players["p1"].hand.len(), 3);
//! ```

pub mod core;
pub mod cards;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CardGameConfig, DiceGameConfig, GameRng, InvalidArgument, PlayerId, PlayerMap, Result, Shuffle,
};

pub use crate::cards::{Card, CardId, CATALOG};

pub use crate::games::liars_dice::{
    create_initial_dice_game_state, try_create_dice_game_state, Bid, DiceGameState,
    PlayerDiceState, RoundResolution,
};

pub use crate::games::card_battle::{
    create_initial_card_game_state, create_initial_card_game_state_with,
    try_create_card_game_state, CardGameState, PlayerCardState,
};
