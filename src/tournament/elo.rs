use std::collections::HashMap;

use super::types::TournamentPlayerId;

/// Every player starts a run here.
pub const INITIAL_RATING: f64 = 1500.0;

/// K-factor for rating updates (higher = more volatile).
pub const K_FACTOR: f64 = 32.0;

pub type RatingMap = HashMap<TournamentPlayerId, f64>;

/// Seed every player's rating at the initial value.
pub fn seed_ratings(ids: &[TournamentPlayerId]) -> RatingMap {
    ids.iter().map(|&id| (id, INITIAL_RATING)).collect()
}

/// Expected score for a player against an opponent, logistic form.
pub fn expected_score(rating: f64, opponent_rating: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent_rating - rating) / 400.0))
}

/// Apply a single win/loss outcome to the rating map.
///
/// The update is sequential and path dependent: applying the same outcomes
/// in a different order produces different ratings, so callers must feed
/// results in the order they were recorded.
pub fn apply_result(ratings: &mut RatingMap, winner: TournamentPlayerId, loser: TournamentPlayerId) {
    let winner_rating = get_rating(ratings, winner);
    let loser_rating = get_rating(ratings, loser);

    let expected_win = expected_score(winner_rating, loser_rating);
    let expected_loss = 1.0 - expected_win;

    ratings.insert(winner, winner_rating + K_FACTOR * (1.0 - expected_win));
    ratings.insert(loser, loser_rating + K_FACTOR * (0.0 - expected_loss));
}

pub fn get_rating(ratings: &RatingMap, id: TournamentPlayerId) -> f64 {
    ratings.get(&id).copied().unwrap_or(INITIAL_RATING)
}
