//! Two-player card battle.
//!
//! Both players build a deck from the same six-card catalog, draw an opening
//! hand and play cards onto their field. This module only builds the opening
//! state.

mod setup;
mod state;

pub use setup::{
    create_initial_card_game_state, create_initial_card_game_state_with, try_create_card_game_state,
};
pub use state::{CardGameState, PlayerCardState};
