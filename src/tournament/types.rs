use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TournamentPlayerId = u64;
pub type MatchupId = u64;

/// Ephemeral tournament participant, created fresh per run and discarded on
/// reset or apply. `source_id` points back at the roster player it wraps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentPlayer {
    pub id: TournamentPlayerId,
    pub name: String,
    pub source_id: i64,
}

/// A single pairwise comparison between two tournament players.
///
/// Unresolved until a winner is set; once resolved it stays resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matchup {
    pub id: MatchupId,
    pub first: TournamentPlayerId,
    pub second: TournamentPlayerId,
    pub winner_id: Option<TournamentPlayerId>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Matchup {
    pub fn new(id: MatchupId, first: TournamentPlayerId, second: TournamentPlayerId) -> Self {
        Self {
            id,
            first,
            second,
            winner_id: None,
            resolved_at: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.winner_id.is_some()
    }

    /// Mark the matchup resolved with the given winner and a resolution
    /// timestamp. An already-resolved matchup is returned unchanged. The
    /// winner must be one of the two participants (caller contract).
    pub fn resolve(mut self, winner_id: TournamentPlayerId) -> Self {
        if self.is_resolved() {
            return self;
        }

        self.winner_id = Some(winner_id);
        self.resolved_at = Some(Utc::now());
        self
    }

    /// The participant that did not win, once a winner is set.
    pub fn loser_id(&self) -> Option<TournamentPlayerId> {
        let winner = self.winner_id?;
        if winner == self.first {
            Some(self.second)
        } else {
            Some(self.first)
        }
    }

    pub fn involves(&self, id: TournamentPlayerId) -> bool {
        self.first == id || self.second == id
    }
}

/// Final standing for one tournament player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRanking {
    pub player_id: TournamentPlayerId,
    /// Raw Elo rating after replaying all recorded results.
    pub rating: f64,
    /// Dense rank, 1 = best, no gaps.
    pub rank: usize,
    /// Rating rescaled into the 1-10 skill range.
    pub score: i32,
    /// How many comparisons informed this ranking, as a 0-1 measure.
    pub confidence: f64,
}
