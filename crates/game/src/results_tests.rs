use super::*;

#[test]
fn test_score_counts_draws_as_half() {
    let result = MatchResult {
        wins: 3,
        losses: 1,
        draws: 2,
    };
    assert_eq!(result.total_games(), 6);
    assert!((result.score() - 4.0 / 6.0).abs() < 1e-9);
    assert_eq!(result.summary(), "3-1-2 (66.7%)");
}

#[test]
fn test_empty_match_scores_even() {
    assert!((MatchResult::new().score() - 0.5).abs() < 1e-9);
}

#[test]
fn test_record_and_flip() {
    let mut result = MatchResult::new();
    result.record(GameResult::Win);
    result.record(GameResult::Loss.flipped());
    result.record(GameResult::Draw.flipped());
    assert_eq!(
        result,
        MatchResult {
            wins: 2,
            losses: 0,
            draws: 1
        }
    );
}
