use crate::domain::models::{Player, Team, TeamSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    A,
    B,
}

/// Assign players to two teams in the given order.
///
/// Destination is the first non-tied rule, in strict priority order: fewer
/// players at this player's position, then fewer players overall, then the
/// running-average-skill tie-break. Labels are folded to lowercase. Total
/// over any finite input; an empty input yields two empty teams.
pub fn assign(players: Vec<Player>, label_a: &str, label_b: &str) -> TeamSet {
    let mut teams = TeamSet::new(label_a.to_lowercase(), label_b.to_lowercase());

    for player in players {
        match choose_side(&teams.team_a, &teams.team_b, &player) {
            Side::A => teams.team_a.push(player),
            Side::B => teams.team_b.push(player),
        }
    }

    teams
}

fn choose_side(a: &Team, b: &Team, player: &Player) -> Side {
    by_position_count(a, b, player)
        .or_else(|| by_squad_size(a, b))
        .unwrap_or_else(|| by_average_skill(a, b))
}

/// A team short on this player's position takes precedence over everything.
fn by_position_count(a: &Team, b: &Team, player: &Player) -> Option<Side> {
    side_with_fewer(
        a.position_count(player.position),
        b.position_count(player.position),
    )
}

fn by_squad_size(a: &Team, b: &Team) -> Option<Side> {
    side_with_fewer(a.total_players(), b.total_players())
}

fn side_with_fewer(count_a: usize, count_b: usize) -> Option<Side> {
    if count_a < count_b {
        Some(Side::A)
    } else if count_b < count_a {
        Some(Side::B)
    } else {
        None
    }
}

/// Final tie-break once position counts and squad sizes are level.
///
/// The side whose running average is higher-or-equal receives the next pick;
/// ties go to team A. Over a position-homogeneous roster this alternates
/// picks round-robin in descending skill order.
fn by_average_skill(a: &Team, b: &Team) -> Side {
    if a.average_skill() >= b.average_skill() {
        Side::A
    } else {
        Side::B
    }
}
