use super::*;
use alphabeta_engine::AlphaBetaEngine;
use random_engine::RandomPlayer;

#[test]
fn test_self_play() {
    let mut player1 = AlphaBetaEngine::new();
    let mut player2 = AlphaBetaEngine::new();

    let config = MatchConfig {
        num_games: 2,
        depth: 2,
        max_plies: 60,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut player1, &mut player2).unwrap();

    // Self-play should complete without error
    assert_eq!(result.total_games(), 2);
}

#[test]
fn test_alphabeta_does_not_lose_to_random() {
    let mut engine = AlphaBetaEngine::new();
    let mut random = RandomPlayer::seeded(11);

    let config = MatchConfig {
        num_games: 2,
        depth: 3,
        max_plies: 200,
        ..Default::default()
    };

    let result = MatchRunner::new(config)
        .run_match(&mut engine, &mut random)
        .unwrap();
    assert_eq!(result.total_games(), 2);
    assert_eq!(result.losses, 0);
}

#[test]
fn test_quick_match_between_random_players() {
    let mut a = RandomPlayer::seeded(1);
    let mut b = RandomPlayer::seeded(2);

    let result = quick_match(&mut a, &mut b, 3, 1).unwrap();
    assert_eq!(result.total_games(), 3);
}
