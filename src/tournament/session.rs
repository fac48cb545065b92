use std::collections::{HashMap, VecDeque};

use rand::Rng;

use crate::domain::models::Player;

use super::rankings;
use super::schedule::generate_matchups;
use super::types::{Matchup, MatchupId, PlayerRanking, TournamentPlayer, TournamentPlayerId};

/// Tournament lifecycle, as driven by the hosting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Comparing,
    Results,
}

/// Wrap each roster player in a fresh tournament identity.
///
/// Identities are random per run and never persisted; the roster players are
/// read, not mutated.
pub fn initialize(roster: &[Player]) -> HashMap<TournamentPlayerId, TournamentPlayer> {
    initialize_with(roster, &mut rand::rng())
}

pub fn initialize_with<R: Rng>(
    roster: &[Player],
    rng: &mut R,
) -> HashMap<TournamentPlayerId, TournamentPlayer> {
    roster
        .iter()
        .map(|player| {
            let id: TournamentPlayerId = rng.random();
            (
                id,
                TournamentPlayer {
                    id,
                    name: player.name.clone(),
                    source_id: player.id,
                },
            )
        })
        .collect()
}

/// One tournament run: participants, the pending schedule, and the resolved
/// results in recording order.
///
/// The resolution log is ordered state, not incidental list layout: Elo
/// replay is order sensitive, so rankings are always computed from the log
/// in the order results were recorded.
pub struct TournamentSession {
    players: HashMap<TournamentPlayerId, TournamentPlayer>,
    pending: VecDeque<Matchup>,
    resolved: Vec<Matchup>,
    phase: Phase,
}

impl TournamentSession {
    pub fn new(roster: &[Player]) -> Self {
        Self {
            players: initialize(roster),
            pending: VecDeque::new(),
            resolved: Vec::new(),
            phase: Phase::Setup,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn players(&self) -> &HashMap<TournamentPlayerId, TournamentPlayer> {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    /// Generate the schedule and enter the comparing phase.
    ///
    /// The hosting layer is expected to refuse to start a run with fewer
    /// than two players; here such a run just gets an empty schedule and
    /// falls through to results on the next transition check.
    pub fn start(&mut self) {
        let ids: Vec<TournamentPlayerId> = self.players.keys().copied().collect();
        self.pending = generate_matchups(&ids).into();
        self.resolved.clear();
        self.phase = if self.pending.is_empty() {
            Phase::Results
        } else {
            Phase::Comparing
        };
    }

    /// The matchup currently up for judgment, if any remain.
    pub fn next_matchup(&self) -> Option<&Matchup> {
        self.pending.front()
    }

    /// Record a winner for a pending matchup and append it to the resolution
    /// log. The run moves to results once the schedule is exhausted. Returns
    /// the resolved matchup, or `None` for an unknown matchup id.
    pub fn record_result(
        &mut self,
        matchup_id: MatchupId,
        winner_id: TournamentPlayerId,
    ) -> Option<&Matchup> {
        let index = self.pending.iter().position(|m| m.id == matchup_id)?;
        let matchup = self.pending.remove(index)?;

        self.resolved.push(matchup.resolve(winner_id));
        if self.pending.is_empty() {
            self.phase = Phase::Results;
        }

        self.resolved.last()
    }

    /// Resolved matchups in the order they were recorded.
    pub fn resolution_log(&self) -> &[Matchup] {
        &self.resolved
    }

    /// Rankings over the results recorded so far.
    pub fn rankings(&self) -> Vec<PlayerRanking> {
        rankings::compute_rankings(&self.players, &self.resolved)
    }

    /// Write the run's scores back onto a roster copy. Terminal for the run
    /// as far as the hosting layer is concerned; the session itself holds no
    /// roster state.
    pub fn apply_to_roster(&self, roster: &[Player]) -> Vec<Player> {
        rankings::apply_to_roster(&self.rankings(), &self.players, roster)
    }

    /// Discard all run state, including tournament identities, and return to
    /// setup. A restarted run draws fresh ids.
    pub fn reset(&mut self, roster: &[Player]) {
        *self = Self::new(roster);
    }
}
