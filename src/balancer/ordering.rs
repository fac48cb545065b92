use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Reverse;

use crate::domain::models::Player;

/// Random permutation followed by a stable sort on skill, descending.
///
/// The permutation is the balancer's only source of randomness: players tied
/// on skill keep their shuffled relative order through the stable sort, so
/// exact ties are not routed to the same team run after run. Everything after
/// this step is deterministic.
pub fn draft_order<R: Rng>(mut players: Vec<Player>, rng: &mut R) -> Vec<Player> {
    players.shuffle(rng);
    players.sort_by_key(|p| Reverse(p.skill));
    players
}
