use anyhow::Result;
use colored::Colorize;
use log::info;
use std::path::Path;

use crate::balancer::balance;
use crate::domain::models::{Player, Team, TeamSet};
use crate::domain::roster::load_roster;

/// Split a roster file into two labeled teams and print the result.
pub fn run(roster_path: &Path, label_a: &str, label_b: &str, json: bool) -> Result<()> {
    let players = load_roster(roster_path)?;
    info!(
        "Balancing {} players into '{}' and '{}'",
        players.len(),
        label_a,
        label_b
    );

    let teams = balance(players, label_a, label_b);

    if json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
    } else {
        print_teams(&teams);
    }

    Ok(())
}

fn print_teams(teams: &TeamSet) {
    print_team(&teams.team_a);
    print_team(&teams.team_b);
    println!();
}

fn print_team(team: &Team) {
    println!(
        "\n{}  ({} players, avg skill {:.1})",
        team.label.to_uppercase().bold(),
        team.total_players(),
        team.average_skill()
    );
    print_position_group("Forwards", &team.forwards);
    print_position_group("Defense", &team.defensemen);
}

fn print_position_group(heading: &str, players: &[Player]) {
    if players.is_empty() {
        return;
    }

    println!("  {}", heading.dimmed());
    for player in players {
        println!("    {:<24} {}", player.name, player.skill);
    }
}
