use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "balanced teams and skill rankings for pickup hockey rosters")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Split a roster into two balanced teams
    Balance {
        /// Path to the roster JSON file (attending players only)
        roster: PathBuf,
        /// Label for the first team
        #[arg(long, default_value = "dark")]
        team_a: String,
        /// Label for the second team
        #[arg(long, default_value = "white")]
        team_b: String,
        /// Print the team set as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run a pairwise comparison tournament and derive skill rankings
    Rank {
        /// Path to the roster JSON file
        roster: PathBuf,
        /// Write the re-skilled roster to this path afterwards
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
