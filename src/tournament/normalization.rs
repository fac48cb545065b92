use std::collections::HashMap;

use super::elo::RatingMap;
use super::types::TournamentPlayerId;

const SCORE_FLOOR: f64 = 1.0;
const SCORE_SPAN: f64 = 9.0;

/// Score assigned when a run produced no rating spread (e.g. zero results).
const FLAT_RUN_SCORE: i32 = 5;

/// Rescale a run's ratings into the 1-10 skill range used by the roster.
///
/// The rescale is linear against the run's own minimum and maximum, rounded
/// to the nearest integer, so the top-rated player scores 10 and the
/// bottom-rated scores 1 whenever the ratings are not all equal.
pub fn normalized_scores(ratings: &RatingMap) -> HashMap<TournamentPlayerId, i32> {
    let Some((min, max)) = rating_bounds(ratings) else {
        return HashMap::new();
    };

    ratings
        .iter()
        .map(|(&id, &rating)| (id, rescale(rating, min, max)))
        .collect()
}

fn rating_bounds(ratings: &RatingMap) -> Option<(f64, f64)> {
    let min = ratings.values().copied().reduce(f64::min)?;
    let max = ratings.values().copied().reduce(f64::max)?;
    Some((min, max))
}

fn rescale(rating: f64, min: f64, max: f64) -> i32 {
    if max == min {
        return FLAT_RUN_SCORE;
    }

    let score = SCORE_FLOOR + SCORE_SPAN * (rating - min) / (max - min);
    score.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_map_to_one_and_ten() {
        let ratings = RatingMap::from([(1, 1400.0), (2, 1500.0), (3, 1650.0)]);

        let scores = normalized_scores(&ratings);

        assert_eq!(scores[&1], 1);
        assert_eq!(scores[&3], 10);
        assert!(scores.values().all(|&s| (1..=10).contains(&s)));
    }

    #[test]
    fn flat_run_scores_everyone_five() {
        let ratings = RatingMap::from([(1, 1500.0), (2, 1500.0), (3, 1500.0)]);

        let scores = normalized_scores(&ratings);

        assert!(scores.values().all(|&s| s == FLAT_RUN_SCORE));
    }

    #[test]
    fn midpoint_rounds_to_nearest() {
        let ratings = RatingMap::from([(1, 1000.0), (2, 1500.0), (3, 2000.0)]);

        let scores = normalized_scores(&ratings);

        // 1 + 9 * 0.5 = 5.5, rounds away from zero.
        assert_eq!(scores[&2], 6);
    }

    #[test]
    fn empty_ratings_yield_no_scores() {
        assert!(normalized_scores(&RatingMap::new()).is_empty());
    }
}
