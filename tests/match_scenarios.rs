//! End-to-end match scenarios.
//!
//! These drive `Match::submit_move` the way a console or chat transport
//! would, checking the exact text returned and the state left behind.

use rps_bomb::{
    GameRng, GameState, Match, MatchConfig, MatchResult, MatchSnapshot, Move, Phase, RandomBot,
    Rejection, Response, RoundOutcome, RpsError, ScriptedBot,
};

const WELCOME: &str = "Welcome to Rock-Paper-Scissors-Bomb! Best of 3 rounds. Valid moves: rock, \
                       paper, scissors, bomb. Bomb can be used only once per game. Let's begin!";

fn scripted_match(bot_moves: &[Move]) -> Match<ScriptedBot> {
    Match::new(
        MatchConfig::default(),
        ScriptedBot::new(bot_moves.iter().copied()),
        GameRng::new(42),
    )
    .unwrap()
}

/// Run the intro so the next call plays round 1.
fn started(bot_moves: &[Move]) -> Match<ScriptedBot> {
    let mut game = scripted_match(bot_moves);
    game.submit_move(None);
    game
}

// =============================================================================
// Intro
// =============================================================================

#[test]
fn test_first_call_returns_welcome() {
    let mut game = scripted_match(&[]);

    let response = game.submit_move(None);
    assert_eq!(response.message(), WELCOME);
    assert_eq!(game.state().round_count, 1);
}

#[test]
fn test_first_call_with_move_still_welcomes() {
    let mut game = scripted_match(&[Move::Scissors]);

    let response = game.submit_move(Some("rock"));
    assert_eq!(response.message(), WELCOME);
    assert_eq!(game.state(), &GameState::new());

    // The move was not consumed; round 1 is still to play
    let response = game.submit_move(Some("rock"));
    assert_eq!(
        response.message(),
        "Round 1: You WIN! rock beats scissors.\nCurrent Score: You 1 - 0 Bot"
    );
}

#[test]
fn test_welcome_names_configured_rounds() {
    let config = MatchConfig::new().with_total_rounds(5);
    let mut game = Match::standard(config, GameRng::new(1)).unwrap();

    let text = game.submit_move(None).message();
    assert!(text.contains("Best of 5 rounds."), "{}", text);
}

// =============================================================================
// Rounds
// =============================================================================

#[test]
fn test_resumed_round_two_win() {
    let state = GameState {
        round_count: 2,
        ..GameState::default()
    };
    let mut game = Match::resume(
        MatchConfig::default(),
        state,
        ScriptedBot::new([Move::Scissors]),
        GameRng::new(42),
    )
    .unwrap();

    let response = game.submit_move(Some("rock"));
    match &response {
        Response::Round { result, .. } => {
            assert_eq!(result.to_string(), "Round 2: You WIN! rock beats scissors.");
            assert_eq!(result.outcome, RoundOutcome::UserWin);
        }
        other => panic!("expected a round, got {:?}", other),
    }
    assert_eq!(game.state().user_score, 1);
    assert_eq!(game.state().round_count, 3);
}

#[test]
fn test_resumed_round_with_bombless_bot() {
    let state = GameState {
        round_count: 2,
        ..GameState::default()
    };
    let mut game = Match::resume(
        MatchConfig::default(),
        state,
        RandomBot::new(0.0),
        GameRng::new(42),
    )
    .unwrap();

    match game.submit_move(Some("rock")) {
        Response::Round { result, .. } => {
            assert_ne!(result.bot_move, Move::Bomb);
            assert_eq!(result.round, 2);
        }
        other => panic!("expected a round, got {:?}", other),
    }
    assert_eq!(game.state().round_count, 3);
    assert!(!game.state().bot_bomb_used);
}

#[test]
fn test_second_bomb_rejected_without_mutation() {
    let mut game = started(&[Move::Rock, Move::Paper]);

    let first = game.submit_move(Some("bomb"));
    assert_eq!(
        first.message(),
        "Round 1: You WIN! bomb beats rock.\nCurrent Score: You 1 - 0 Bot"
    );
    assert!(game.state().user_bomb_used);

    let before = game.state().clone();
    let second = game.submit_move(Some("bomb"));
    assert_eq!(second, Response::Rejected(Rejection::BombAlreadyUsed));
    assert_eq!(
        second.message(),
        "You have already used your bomb. Choose another move."
    );
    assert_eq!(game.state(), &before);
}

#[test]
fn test_mixed_case_move_accepted() {
    let mut game = started(&[Move::Rock]);

    match game.submit_move(Some("Rock")) {
        Response::Round { result, .. } => {
            assert_eq!(result.user_move, Move::Rock);
            assert_eq!(result.to_string(), "Round 1: It's a DRAW! Both played rock.");
        }
        other => panic!("expected a round, got {:?}", other),
    }
}

#[test]
fn test_unknown_move_rejected() {
    let mut game = started(&[]);

    let response = game.submit_move(Some("lizard"));
    assert_eq!(
        response.message(),
        "Invalid move. Valid moves are: rock, paper, scissors, bomb."
    );
    assert_eq!(game.state().round_count, 1);
}

#[test]
fn test_missing_input_rejected() {
    let mut game = started(&[]);

    assert_eq!(game.submit_move(None), Response::Rejected(Rejection::InvalidMove));
    assert_eq!(game.submit_move(Some("")), Response::Rejected(Rejection::InvalidMove));
    assert_eq!(game.state(), &GameState::new());
}

#[test]
fn test_bomb_vs_bomb_is_draw() {
    let mut game = started(&[Move::Bomb]);

    let response = game.submit_move(Some("bomb"));
    assert_eq!(
        response.message(),
        "Round 1: It's a DRAW! Both played bomb.\nCurrent Score: You 0 - 0 Bot"
    );
    assert!(game.state().user_bomb_used);
    assert!(game.state().bot_bomb_used);
}

#[test]
fn test_bot_bomb_beats_user() {
    let mut game = started(&[Move::Bomb]);

    let response = game.submit_move(Some("paper"));
    assert_eq!(
        response.message(),
        "Round 1: You LOSE! bomb beats paper.\nCurrent Score: You 0 - 1 Bot"
    );
}

// =============================================================================
// Game Over
// =============================================================================

#[test]
fn test_final_summary_user_wins() {
    let state = GameState {
        round_count: 4,
        user_score: 2,
        bot_score: 1,
        user_bomb_used: false,
        bot_bomb_used: true,
    };
    let mut game = Match::resume(
        MatchConfig::default(),
        state.clone(),
        RandomBot::default(),
        GameRng::new(0),
    )
    .unwrap();
    assert_eq!(game.phase(), Phase::Finished);

    let response = game.submit_move(Some("rock"));
    assert!(response.is_game_over());
    assert_eq!(
        response.message(),
        "Game over! You WIN the game with a score of 2-1."
    );

    // No further rounds are processed
    game.submit_move(Some("paper"));
    assert_eq!(game.state(), &state);
}

#[test]
fn test_full_match_bot_wins() {
    let mut game = started(&[Move::Paper, Move::Bomb, Move::Scissors]);

    game.submit_move(Some("rock"));
    game.submit_move(Some("scissors"));
    let last = game.submit_move(Some("scissors"));
    assert_eq!(
        last.message(),
        "Round 3: It's a DRAW! Both played scissors.\nCurrent Score: You 0 - 2 Bot"
    );

    let summary = game.submit_move(None);
    assert_eq!(
        summary.message(),
        "Game over! The BOT wins the game with a score of 2-0."
    );
    assert_eq!(
        game.result(),
        Some(MatchResult::BotWins {
            user_score: 0,
            bot_score: 2
        })
    );
}

#[test]
fn test_full_match_draw() {
    let mut game = started(&[Move::Scissors, Move::Rock, Move::Paper]);

    game.submit_move(Some("rock"));
    game.submit_move(Some("scissors"));
    game.submit_move(Some("paper"));

    assert_eq!(
        game.submit_move(Some("rock")).message(),
        "Game over! It's a DRAW with a score of 1-1."
    );
}

#[test]
fn test_exactly_total_rounds_played() {
    let mut game = Match::standard(MatchConfig::default(), GameRng::new(5)).unwrap();
    game.submit_move(None);

    let mut rounds = 0;
    loop {
        let response = game.submit_move(Some("scissors"));
        if response.is_game_over() {
            break;
        }
        assert!(matches!(response, Response::Round { .. }));
        rounds += 1;
    }

    assert_eq!(rounds, 3);
    assert_eq!(game.state().rounds_played(), 3);
}

// =============================================================================
// Independence and Determinism
// =============================================================================

#[test]
fn test_independent_matches_share_nothing() {
    let mut a = started(&[Move::Scissors]);
    let mut b = started(&[Move::Paper]);

    a.submit_move(Some("rock"));
    b.submit_move(Some("rock"));

    assert_eq!(a.state().user_score, 1);
    assert_eq!(b.state().bot_score, 1);
}

#[test]
fn test_same_seed_same_match() {
    let play = |seed: u64| {
        let mut game = Match::standard(MatchConfig::default(), GameRng::new(seed)).unwrap();
        ["", "rock", "paper", "bomb", "scissors"]
            .iter()
            .map(|input| game.submit_move(Some(input)).message())
            .collect::<Vec<_>>()
    };

    assert_eq!(play(2024), play(2024));
}

// =============================================================================
// Checkpoints
// =============================================================================

fn resume_state(state: GameState) -> Result<Match<RandomBot>, RpsError> {
    Match::resume(
        MatchConfig::default(),
        state,
        RandomBot::default(),
        GameRng::new(5),
    )
}

#[test]
fn test_resume_rejects_zero_round_count() {
    let state = GameState {
        round_count: 0,
        ..GameState::default()
    };

    match resume_state(state) {
        Err(RpsError::InvalidStateValue { field, value }) => {
            assert_eq!(field, "round_count");
            assert_eq!(value, 0);
        }
        Err(other) => panic!("expected invalid round_count, got {:?}", other),
        Ok(_) => panic!("zero round_count was accepted"),
    }
}

#[test]
fn test_resume_rejects_scores_beyond_rounds_played() {
    let state = GameState {
        round_count: 2,
        user_score: 1,
        bot_score: 1,
        ..GameState::default()
    };

    match resume_state(state) {
        Err(RpsError::InconsistentScore {
            user_score,
            bot_score,
            rounds_played,
        }) => assert_eq!((user_score, bot_score, rounds_played), (1, 1, 1)),
        Err(other) => panic!("expected inconsistent score, got {:?}", other),
        Ok(_) => panic!("overscored state was accepted"),
    }
}

#[test]
fn test_resume_rejects_round_count_past_match_end() {
    let state = GameState {
        round_count: 5,
        ..GameState::default()
    };
    assert!(matches!(
        resume_state(state),
        Err(RpsError::InvalidStateValue { value: 5, .. })
    ));

    // The round after the last is a finished match, not an error
    let finished = GameState {
        round_count: 4,
        user_score: 2,
        bot_score: 1,
        ..GameState::default()
    };
    let mut game = resume_state(finished).unwrap();
    assert_eq!(game.phase(), Phase::Finished);
    assert!(game.submit_move(Some("rock")).is_game_over());
}

#[test]
fn test_restore_rejects_inconsistent_snapshot_bytes() {
    let snapshot = MatchSnapshot {
        state: GameState {
            round_count: 0,
            user_score: 5,
            ..GameState::default()
        },
        introduced: true,
        rng: GameRng::new(9).state(),
    };

    // Decoding succeeds; the match refuses the state it carries
    let bytes = snapshot.to_bytes().unwrap();
    let decoded = MatchSnapshot::from_bytes(&bytes).unwrap();
    let result = Match::restore(MatchConfig::default(), decoded, RandomBot::default());
    assert!(result.is_err());
}

#[test]
fn test_oversized_round_config_rejected() {
    let config = MatchConfig::new().with_total_rounds(u32::MAX);
    assert!(matches!(
        Match::standard(config, GameRng::new(0)),
        Err(RpsError::Configuration { .. })
    ));
}
