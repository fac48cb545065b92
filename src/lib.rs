pub mod balancer;
pub mod cli;
pub mod domain;
pub mod services;
pub mod tournament;

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use crate::cli::{Cli, Command};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_balance(roster: &Path, team_a: &str, team_b: &str, json: bool) -> Result<()> {
    services::balancing::run(roster, team_a, team_b, json)
}

pub fn handle_rank(roster: &Path, output: Option<&Path>) -> Result<()> {
    services::ranking::run(roster, output)
}
