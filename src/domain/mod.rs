pub mod models;
pub mod roster;

pub use models::{Player, Position, Team, TeamSet};
pub use roster::{load_roster, save_roster};
