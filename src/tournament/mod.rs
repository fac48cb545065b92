pub mod elo;
mod normalization;
pub mod rankings;
pub mod schedule;
mod session;
pub mod types;

pub use rankings::{apply_to_roster, compute_rankings};
pub use schedule::generate_matchups;
pub use session::{Phase, TournamentSession, initialize};
pub use types::{Matchup, MatchupId, PlayerRanking, TournamentPlayer, TournamentPlayerId};
