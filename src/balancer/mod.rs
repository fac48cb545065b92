mod assignment;
mod ordering;

pub use assignment::assign;
pub use ordering::draft_order;

use crate::domain::models::{Player, TeamSet};

/// Split a roster into two teams, balancing position counts, squad size and
/// skill, in that priority order.
///
/// Input is assumed pre-filtered to eligible players; skill and position are
/// taken as-is. Labels are folded to lowercase and must differ after folding
/// (caller contract, not validated). Never fails.
pub fn balance(players: Vec<Player>, label_a: &str, label_b: &str) -> TeamSet {
    let ordered = draft_order(players, &mut rand::rng());
    assign(ordered, label_a, label_b)
}
