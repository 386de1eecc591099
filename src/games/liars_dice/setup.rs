//! Initial state construction.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::state::{DiceGameState, PlayerDiceState, RoundResolution};
use crate::core::{DiceGameConfig, InvalidArgument, PlayerId, PlayerMap, Result};

/// Build the opening state for a game among `player_ids`.
///
/// Every player starts with five unrolled dice and `first_player_id` acts
/// first. Never fails: input the checked variant would reject is logged and
/// the state is built anyway.
///
/// ```
/// use party_games::games::liars_dice::create_initial_dice_game_state;
///
/// let state = create_initial_dice_game_state(["a", "b", "c"], "b");
///
/// assert_eq!(state.players.len(), 3);
/// assert_eq!(state.players["a"].dice_count, 5);
/// assert_eq!(state.current_player.as_str(), "b");
/// ```
pub fn create_initial_dice_game_state<I, P>(
    player_ids: I,
    first_player_id: impl Into<PlayerId>,
) -> DiceGameState
where
    I: IntoIterator<Item = P>,
    P: Into<PlayerId>,
{
    let roster: Vec<PlayerId> = player_ids.into_iter().map(Into::into).collect();
    let first = first_player_id.into();

    if let Err(err) = check_roster(&roster, &first) {
        warn!(%err, "building dice game from malformed roster");
    }

    build(&DiceGameConfig::default(), roster, first)
}

/// Checked variant of [`create_initial_dice_game_state`].
///
/// Rejects an empty roster, repeated ids, a first player outside the roster
/// and an unplayable config.
pub fn try_create_dice_game_state<I, P>(
    config: &DiceGameConfig,
    player_ids: I,
    first_player_id: impl Into<PlayerId>,
) -> Result<DiceGameState>
where
    I: IntoIterator<Item = P>,
    P: Into<PlayerId>,
{
    config.validate()?;

    let roster: Vec<PlayerId> = player_ids.into_iter().map(Into::into).collect();
    let first = first_player_id.into();
    check_roster(&roster, &first)?;

    Ok(build(config, roster, first))
}

fn check_roster(roster: &[PlayerId], first: &PlayerId) -> Result<()> {
    if roster.is_empty() {
        return Err(InvalidArgument::EmptyRoster);
    }

    let mut seen = HashSet::with_capacity(roster.len());
    for id in roster {
        if !seen.insert(id) {
            return Err(InvalidArgument::DuplicatePlayer(id.clone()));
        }
    }

    if !seen.contains(first) {
        return Err(InvalidArgument::UnknownFirstPlayer(first.clone()));
    }
    Ok(())
}

fn build(config: &DiceGameConfig, roster: Vec<PlayerId>, first: PlayerId) -> DiceGameState {
    let players = PlayerMap::new(roster, |_| PlayerDiceState::new(config.starting_dice));

    debug!(
        players = players.len(),
        first_player = %first,
        starting_dice = config.starting_dice,
        "created dice game state"
    );

    DiceGameState {
        players,
        turn_order: Vec::new(),
        current_player: first,
        current_bid: None,
        last_bidder: None,
        turn: 1,
        round: 1,
        game_winner: None,
        round_info: RoundResolution::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = create_initial_dice_game_state(["a", "b", "c"], "b");

        assert_eq!(state.players.len(), 3);
        for id in ["a", "b", "c"] {
            let player = state.player(id).unwrap();
            assert_eq!(player.dice_count, 5);
            assert!(player.dice.is_empty());
        }
        assert_eq!(state.current_player, PlayerId::new("b"));
        assert!(state.turn_order.is_empty());
        assert_eq!(state.current_bid, None);
        assert_eq!(state.last_bidder, None);
        assert_eq!(state.turn, 1);
        assert_eq!(state.round, 1);
        assert_eq!(state.game_winner, None);
        assert_eq!(state.round_info, RoundResolution::default());
        assert_eq!(state.total_dice(), 15);
    }

    #[test]
    fn test_total_on_unknown_first_player() {
        let state = create_initial_dice_game_state(["a", "b"], "zed");

        assert_eq!(state.current_player.as_str(), "zed");
        assert!(!state.players.contains("zed"));
    }

    #[test]
    fn test_total_on_empty_roster() {
        let state = create_initial_dice_game_state(Vec::<String>::new(), "a");

        assert!(state.players.is_empty());
        assert_eq!(state.total_dice(), 0);
    }

    #[test]
    fn test_checked_rejects_bad_roster() {
        let config = DiceGameConfig::default();

        assert_eq!(
            try_create_dice_game_state(&config, Vec::<String>::new(), "a"),
            Err(InvalidArgument::EmptyRoster)
        );
        assert_eq!(
            try_create_dice_game_state(&config, ["a", "b", "a"], "a"),
            Err(InvalidArgument::DuplicatePlayer(PlayerId::new("a")))
        );
        assert_eq!(
            try_create_dice_game_state(&config, ["a", "b"], "c"),
            Err(InvalidArgument::UnknownFirstPlayer(PlayerId::new("c")))
        );
    }

    #[test]
    fn test_checked_uses_config() {
        let config = DiceGameConfig::default().with_starting_dice(3);
        let state = try_create_dice_game_state(&config, ["a", "b"], "a").unwrap();

        assert_eq!(state.players["a"].dice_count, 3);
        assert_eq!(state.total_dice(), 6);

        let zero = DiceGameConfig::default().with_starting_dice(0);
        assert_eq!(
            try_create_dice_game_state(&zero, ["a"], "a"),
            Err(InvalidArgument::ZeroStartingDice)
        );
    }

    #[test]
    fn test_checked_matches_total() {
        let total = create_initial_dice_game_state(["x", "y"], "y");
        let checked = try_create_dice_game_state(&DiceGameConfig::default(), ["x", "y"], "y").unwrap();
        assert_eq!(total, checked);
    }
}
