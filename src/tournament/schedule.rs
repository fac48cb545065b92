use rand::Rng;
use rand::seq::SliceRandom;

use super::types::{Matchup, TournamentPlayerId};

/// Comparisons generated per player. Roughly 1.5 per player gives a stable
/// ranking without a full round-robin.
const MATCHUPS_PER_PLAYER: f64 = 1.5;

/// Build an unresolved comparison schedule for a run.
///
/// Fewer than two players yields an empty schedule; the hosting layer is
/// expected to refuse to start such a run.
pub fn generate_matchups(ids: &[TournamentPlayerId]) -> Vec<Matchup> {
    generate_matchups_with(ids, &mut rand::rng())
}

/// Pairs are drawn two-at-a-time from a shuffled copy of the id list. When a
/// round runs out (an odd leftover is discarded with it), a freshly
/// reshuffled round begins, until the schedule reaches `ceil(n * 1.5)`
/// matchups. The assembled schedule is shuffled last so presentation order
/// does not reveal the round structure.
pub fn generate_matchups_with<R: Rng>(
    ids: &[TournamentPlayerId],
    rng: &mut R,
) -> Vec<Matchup> {
    if ids.len() < 2 {
        return Vec::new();
    }

    let target = target_matchup_count(ids.len());
    let mut matchups = Vec::with_capacity(target);
    let mut round: Vec<TournamentPlayerId> = Vec::new();

    while matchups.len() < target {
        if round.len() < 2 {
            round = reshuffled_round(ids, rng);
        }

        let (Some(first), Some(second)) = (round.pop(), round.pop()) else {
            break;
        };
        matchups.push(Matchup::new(rng.random(), first, second));
    }

    matchups.shuffle(rng);
    matchups
}

fn target_matchup_count(player_count: usize) -> usize {
    (player_count as f64 * MATCHUPS_PER_PLAYER).ceil() as usize
}

fn reshuffled_round<R: Rng>(ids: &[TournamentPlayerId], rng: &mut R) -> Vec<TournamentPlayerId> {
    let mut round = ids.to_vec();
    round.shuffle(rng);
    round
}
