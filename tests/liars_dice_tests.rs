//! Liar's Dice setup tests.
//!
//! These tests check the opening state and its JSON shape as seen by room
//! clients.

use party_games::core::{DiceGameConfig, InvalidArgument, PlayerId};
use party_games::games::liars_dice::{
    create_initial_dice_game_state, try_create_dice_game_state, Bid, RoundResolution,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_three_player_example() {
    let state = create_initial_dice_game_state(["a", "b", "c"], "b");

    let keys: Vec<_> = state.players.player_ids().map(PlayerId::as_str).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);

    for (_, player) in state.players.iter() {
        assert_eq!(player.dice_count, 5);
        assert!(player.dice.is_empty());
    }
    assert_eq!(state.current_player.as_str(), "b");
}

#[test]
fn test_single_player() {
    let state = create_initial_dice_game_state(["solo"], "solo");

    assert_eq!(state.players.len(), 1);
    assert_eq!(state.total_dice(), 5);
}

#[test]
fn test_accepts_owned_ids() {
    let roster = vec![String::from("user-host"), String::from("user-player2")];
    let state = create_initial_dice_game_state(roster, String::from("user-host"));

    assert!(state.players.contains("user-player2"));
    assert_eq!(state.current_player, PlayerId::new("user-host"));
}

#[test]
fn test_json_shape() {
    let state = create_initial_dice_game_state(["user1", "user2"], "user1");
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "players": {
                "user1": { "diceCount": 5, "dice": [] },
                "user2": { "diceCount": 5, "dice": [] },
            },
            "turnOrder": [],
            "currentPlayer": "user1",
            "currentBid": null,
            "lastBidder": null,
            "turn": 1,
            "round": 1,
            "gameWinner": null,
            "roundInfo": {
                "reveal": false,
                "bidder": null,
                "challenger": null,
                "loser": null,
                "actualQuantity": 0,
                "message": "",
            },
        })
    );
}

#[test]
fn test_reads_mid_game_json() {
    let json = serde_json::json!({
        "players": {
            "user1": { "diceCount": 5, "dice": [1, 2, 3, 4, 5] },
            "user2": { "diceCount": 4, "dice": [1, 2, 3, 4] },
            "user3": { "diceCount": 3, "dice": [1, 2, 3] },
        },
        "turnOrder": ["user1", "user2", "user3"],
        "currentPlayer": "user2",
        "currentBid": { "quantity": 2, "face": 3 },
        "lastBidder": "user1",
        "turn": 4,
        "round": 2,
        "gameWinner": null,
        "roundInfo": {
            "reveal": true,
            "bidder": "user3",
            "challenger": "user1",
            "loser": "user3",
            "actualQuantity": 1,
            "message": "user3 loses a die",
        },
    });

    let state: party_games::DiceGameState = serde_json::from_value(json).unwrap();

    assert_eq!(state.total_dice(), 12);
    assert_eq!(state.player("user2").unwrap().dice.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(state.current_bid, Some(Bid::new(2, 3).unwrap()));
    assert_eq!(state.round_info.loser, Some(PlayerId::new("user3")));
}

#[test]
fn test_state_is_mutable_by_caller() {
    let mut state = create_initial_dice_game_state(["a", "b"], "a");
    let pristine = state.clone();

    state.players.get_mut("a").unwrap().dice.extend([6, 6, 2, 1, 4]);
    state.current_bid = Some(Bid::new(3, 6).unwrap());
    state.last_bidder = Some(PlayerId::new("a"));

    assert_eq!(pristine.players["a"].dice.len(), 0);
    assert_eq!(pristine.current_bid, None);
    assert_ne!(pristine, state);
}

#[test]
fn test_checked_variant_errors() {
    init_tracing();
    let config = DiceGameConfig::default();

    let err = try_create_dice_game_state(&config, ["a", "b"], "nobody").unwrap_err();
    assert_eq!(err, InvalidArgument::UnknownFirstPlayer(PlayerId::new("nobody")));
    assert_eq!(err.to_string(), "first player nobody is not in the roster");

    let state = try_create_dice_game_state(&config, ["a", "b"], "a").unwrap();
    assert_eq!(state.round_info, RoundResolution::default());
}

#[test]
fn test_total_variant_logs_and_builds() {
    init_tracing();

    let state = create_initial_dice_game_state(["a", "a"], "a");
    assert_eq!(state.players.len(), 1);
}
