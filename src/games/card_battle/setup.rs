//! Initial state construction.
//!
//! Each player gets a fresh copy of the catalog, shuffled on its own, and
//! draws an opening hand off the top.

use im::Vector;
use tracing::{debug, warn};

use super::state::{CardGameState, PlayerCardState};
use crate::cards::{Card, CATALOG};
use crate::core::{CardGameConfig, GameRng, InvalidArgument, PlayerId, PlayerMap, Result, Shuffle};

/// Build the opening state for `player1_id` against `player2_id`.
///
/// Decks are shuffled with a freshly seeded [`GameRng`]. Player 1 moves first.
pub fn create_initial_card_game_state(
    player1_id: impl Into<PlayerId>,
    player2_id: impl Into<PlayerId>,
) -> CardGameState {
    let mut rng = GameRng::from_entropy();
    create_initial_card_game_state_with(player1_id, player2_id, &mut rng)
}

/// Same as [`create_initial_card_game_state`] with the shuffle source supplied.
///
/// Player 1's deck is shuffled before player 2's. Never fails: identical ids
/// are logged and leave a single player in the map.
///
/// ```
/// use party_games::core::GameRng;
/// use party_games::games::card_battle::create_initial_card_game_state_with;
///
/// let state = create_initial_card_game_state_with("p1", "p2", &mut GameRng::new(7));
///
/// assert_eq!(state.players["p1"].hand.len(), 3);
/// assert_eq!(state.players["p1"].deck.len(), 3);
/// assert!(state.players["p2"].field.is_empty());
/// ```
pub fn create_initial_card_game_state_with<R: Shuffle>(
    player1_id: impl Into<PlayerId>,
    player2_id: impl Into<PlayerId>,
    rng: &mut R,
) -> CardGameState {
    let (player1, player2) = (player1_id.into(), player2_id.into());

    if let Err(err) = check_seats(&player1, &player2) {
        warn!(%err, "building card game with a single player");
    }

    build(&CardGameConfig::default(), player1, player2, rng)
}

/// Checked variant of [`create_initial_card_game_state_with`].
///
/// Rejects identical player ids and a hand larger than the catalog.
pub fn try_create_card_game_state<R: Shuffle>(
    config: &CardGameConfig,
    player1_id: impl Into<PlayerId>,
    player2_id: impl Into<PlayerId>,
    rng: &mut R,
) -> Result<CardGameState> {
    config.validate()?;

    let (player1, player2) = (player1_id.into(), player2_id.into());
    check_seats(&player1, &player2)?;

    Ok(build(config, player1, player2, rng))
}

fn check_seats(player1: &PlayerId, player2: &PlayerId) -> Result<()> {
    if player1 == player2 {
        return Err(InvalidArgument::SamePlayer(player1.clone()));
    }
    Ok(())
}

fn build<R: Shuffle>(
    config: &CardGameConfig,
    player1: PlayerId,
    player2: PlayerId,
    rng: &mut R,
) -> CardGameState {
    let hand_size = config.hand_size.min(CATALOG.len());

    // Shuffle in seat order so a seeded source gives reproducible decks.
    let first = deal(hand_size, rng);
    let second = deal(hand_size, rng);

    let players: PlayerMap<_> = [(player1.clone(), first), (player2, second)]
        .into_iter()
        .collect();

    debug!(
        first_player = %player1,
        hand_size,
        "created card game state"
    );

    CardGameState {
        players,
        current_player: player1,
        turn: 1,
    }
}

/// Shuffle a copy of the catalog and draw the opening hand from the top.
fn deal<R: Shuffle>(hand_size: usize, rng: &mut R) -> PlayerCardState {
    let mut cards = CATALOG.to_vec();
    rng.shuffle(&mut cards);

    let mut hand: Vector<Card> = cards.into_iter().collect();
    let deck = hand.split_off(hand_size);

    PlayerCardState {
        deck,
        hand,
        field: Vector::new(),
    }
}
