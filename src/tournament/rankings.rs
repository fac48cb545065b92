use std::collections::HashMap;

use crate::domain::models::Player;

use super::elo::{self, RatingMap};
use super::normalization::normalized_scores;
use super::types::{Matchup, PlayerRanking, TournamentPlayer, TournamentPlayerId};

/// Resolved matches a player needs before the ranking counts as fully
/// informed.
const FULL_CONFIDENCE_MATCHES: usize = 5;

/// Derive final rankings from a run's recorded results.
///
/// `matchups` must be in the order results were recorded: the Elo replay is
/// path dependent. Unresolved matchups are ignored. Ranks are dense 1..N,
/// rating ties broken by source roster id ascending.
pub fn compute_rankings(
    players: &HashMap<TournamentPlayerId, TournamentPlayer>,
    matchups: &[Matchup],
) -> Vec<PlayerRanking> {
    let ids: Vec<TournamentPlayerId> = players.keys().copied().collect();
    let ratings = replay_matchups(&ids, matchups);
    let scores = normalized_scores(&ratings);
    let played = count_matches_played(matchups);

    let mut standings: Vec<&TournamentPlayer> = players.values().collect();
    standings.sort_by(|a, b| {
        let rating_a = elo::get_rating(&ratings, a.id);
        let rating_b = elo::get_rating(&ratings, b.id);
        rating_b
            .total_cmp(&rating_a)
            .then(a.source_id.cmp(&b.source_id))
    });

    standings
        .iter()
        .enumerate()
        .map(|(index, player)| PlayerRanking {
            player_id: player.id,
            rating: elo::get_rating(&ratings, player.id),
            rank: index + 1,
            score: scores.get(&player.id).copied().unwrap_or_default(),
            confidence: confidence(played.get(&player.id).copied().unwrap_or(0)),
        })
        .collect()
}

fn replay_matchups(ids: &[TournamentPlayerId], matchups: &[Matchup]) -> RatingMap {
    let mut ratings = elo::seed_ratings(ids);

    for matchup in matchups {
        if let (Some(winner), Some(loser)) = (matchup.winner_id, matchup.loser_id()) {
            elo::apply_result(&mut ratings, winner, loser);
        }
    }

    ratings
}

fn count_matches_played(matchups: &[Matchup]) -> HashMap<TournamentPlayerId, usize> {
    let mut counts = HashMap::new();

    for matchup in matchups.iter().filter(|m| m.is_resolved()) {
        *counts.entry(matchup.first).or_insert(0) += 1;
        *counts.entry(matchup.second).or_insert(0) += 1;
    }

    counts
}

fn confidence(matches_played: usize) -> f64 {
    (matches_played as f64 / FULL_CONFIDENCE_MATCHES as f64).min(1.0)
}

/// Write a run's scores back onto the roster.
///
/// Each roster player is matched to its tournament counterpart through the
/// stored back-reference; players without one pass through with skill
/// unchanged.
pub fn apply_to_roster(
    rankings: &[PlayerRanking],
    tournament_players: &HashMap<TournamentPlayerId, TournamentPlayer>,
    roster: &[Player],
) -> Vec<Player> {
    let id_by_source: HashMap<i64, TournamentPlayerId> = tournament_players
        .values()
        .map(|tp| (tp.source_id, tp.id))
        .collect();
    let ranking_by_id: HashMap<TournamentPlayerId, &PlayerRanking> =
        rankings.iter().map(|r| (r.player_id, r)).collect();

    roster
        .iter()
        .map(|player| {
            let mut updated = player.clone();
            let ranking = id_by_source
                .get(&player.id)
                .and_then(|id| ranking_by_id.get(id));
            if let Some(ranking) = ranking {
                updated.skill = ranking.score;
            }
            updated
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participants(n: u64) -> HashMap<TournamentPlayerId, TournamentPlayer> {
        (1..=n)
            .map(|id| {
                (
                    id,
                    TournamentPlayer {
                        id,
                        name: format!("Player {id}"),
                        source_id: id as i64,
                    },
                )
            })
            .collect()
    }

    fn resolved(id: u64, first: u64, second: u64, winner: u64) -> Matchup {
        Matchup::new(id, first, second).resolve(winner)
    }

    #[test]
    fn no_results_means_flat_scores_and_zero_confidence() {
        let players = participants(3);

        let rankings = compute_rankings(&players, &[]);

        assert_eq!(rankings.len(), 3);
        for ranking in &rankings {
            assert_eq!(ranking.score, 5);
            assert_eq!(ranking.confidence, 0.0);
            assert_eq!(ranking.rating, elo::INITIAL_RATING);
        }
    }

    #[test]
    fn ranks_are_dense_and_follow_ratings() {
        let players = participants(3);
        let matchups = vec![
            resolved(100, 1, 2, 1),
            resolved(101, 1, 3, 1),
            resolved(102, 2, 3, 2),
        ];

        let rankings = compute_rankings(&players, &matchups);

        let ranks: Vec<usize> = rankings.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(rankings[0].player_id, 1);
        assert_eq!(rankings[2].player_id, 3);
        assert!(rankings[0].rating > rankings[1].rating);
    }

    #[test]
    fn best_and_worst_map_to_ten_and_one() {
        let players = participants(3);
        let matchups = vec![
            resolved(100, 1, 2, 1),
            resolved(101, 1, 3, 1),
            resolved(102, 2, 3, 2),
        ];

        let rankings = compute_rankings(&players, &matchups);

        assert_eq!(rankings[0].score, 10);
        assert_eq!(rankings[2].score, 1);
        assert!(rankings.iter().all(|r| (1..=10).contains(&r.score)));
    }

    #[test]
    fn rating_ties_break_on_source_roster_id() {
        let players = participants(4);

        let rankings = compute_rankings(&players, &[]);

        let order: Vec<u64> = rankings.iter().map(|r| r.player_id).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn confidence_counts_resolved_matches_capped_at_one() {
        let players = participants(2);
        let matchups: Vec<Matchup> = (0..7)
            .map(|i| resolved(i, 1, 2, if i % 2 == 0 { 1 } else { 2 }))
            .collect();

        let rankings = compute_rankings(&players, &matchups);

        assert!(rankings.iter().all(|r| r.confidence == 1.0));

        let partial = compute_rankings(&players, &matchups[..2]);
        assert!(partial.iter().all(|r| (r.confidence - 0.4).abs() < 1e-9));
    }

    #[test]
    fn unresolved_matchups_are_ignored() {
        let players = participants(2);
        let matchups = vec![Matchup::new(100, 1, 2)];

        let rankings = compute_rankings(&players, &matchups);

        assert!(rankings.iter().all(|r| r.rating == elo::INITIAL_RATING));
        assert!(rankings.iter().all(|r| r.confidence == 0.0));
    }

    #[test]
    fn apply_writes_scores_onto_matching_roster_players() {
        use crate::domain::models::{Player, Position};

        let tournament_players = participants(2);
        let rankings = vec![
            PlayerRanking {
                player_id: 1,
                rating: 1550.0,
                rank: 1,
                score: 10,
                confidence: 1.0,
            },
            PlayerRanking {
                player_id: 2,
                rating: 1450.0,
                rank: 2,
                score: 1,
                confidence: 1.0,
            },
        ];
        let roster = vec![
            Player {
                id: 1,
                name: "Anna".to_string(),
                skill: 5,
                position: Position::Forward,
            },
            Player {
                id: 2,
                name: "Marek".to_string(),
                skill: 5,
                position: Position::Defense,
            },
            Player {
                id: 3,
                name: "Ola".to_string(),
                skill: 6,
                position: Position::Forward,
            },
        ];

        let updated = apply_to_roster(&rankings, &tournament_players, &roster);

        assert_eq!(updated[0].skill, 10);
        assert_eq!(updated[1].skill, 1);
        // No tournament counterpart: passes through untouched.
        assert_eq!(updated[2].skill, 6);
    }
}
