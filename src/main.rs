use anyhow::Result;

use shinny_roster::cli::Command;
use shinny_roster::{handle_balance, handle_rank, interpret};

fn main() {
    sensible_env_logger::init!();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    match interpret() {
        Command::Balance {
            roster,
            team_a,
            team_b,
            json,
        } => handle_balance(&roster, &team_a, &team_b, json),
        Command::Rank { roster, output } => handle_rank(&roster, output.as_deref()),
    }
}
