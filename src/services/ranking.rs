use anyhow::{Context, Result, bail};
use colored::Colorize;
use log::info;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::domain::roster::{load_roster, save_roster};
use crate::tournament::{
    Matchup, PlayerRanking, TournamentPlayer, TournamentPlayerId, TournamentSession,
};

/// Drive a full comparison tournament over a roster file.
///
/// This owns the setup -> comparing -> results transitions: it presents each
/// matchup on the terminal, records the judgment, and prints the rankings
/// once the schedule is done. With `--output`, the re-skilled roster is
/// written back out.
pub fn run(roster_path: &Path, output: Option<&Path>) -> Result<()> {
    let roster = load_roster(roster_path)?;
    if roster.len() < 2 {
        bail!(
            "A tournament needs at least two players, roster has {}",
            roster.len()
        );
    }

    let mut session = TournamentSession::new(&roster);
    session.start();
    info!(
        "Generated {} matchups for {} players",
        session.pending_count(),
        session.player_count()
    );

    let stdin = io::stdin();
    run_comparisons(&mut session, &mut stdin.lock())?;

    let rankings = session.rankings();
    print_rankings(&rankings, session.players());

    if let Some(path) = output {
        let updated = session.apply_to_roster(&roster);
        save_roster(path, &updated)?;
    }

    Ok(())
}

/// Walk the pending schedule, one judgment per matchup.
///
/// Quitting early leaves the remaining matchups unresolved; the rankings are
/// computed over whatever was recorded.
fn run_comparisons(session: &mut TournamentSession, input: &mut impl BufRead) -> Result<()> {
    let total = session.pending_count();

    while let Some(matchup) = session.next_matchup() {
        let matchup = matchup.clone();
        let number = session.resolved_count() + 1;

        match prompt_winner(&matchup, session.players(), number, total, input)? {
            Some(winner) => {
                session.record_result(matchup.id, winner);
            }
            None => break,
        }
    }

    Ok(())
}

fn prompt_winner(
    matchup: &Matchup,
    players: &HashMap<TournamentPlayerId, TournamentPlayer>,
    number: usize,
    total: usize,
    input: &mut impl BufRead,
) -> Result<Option<TournamentPlayerId>> {
    println!("\n{} {number}/{total}", "Matchup".bold());
    println!("  1) {}", display_name(players, matchup.first));
    println!("  2) {}", display_name(players, matchup.second));

    loop {
        print!("Who is better? [1/2, q to finish early] ");
        io::stdout().flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read answer")?;
        if read == 0 {
            return Ok(None);
        }

        match line.trim() {
            "1" => return Ok(Some(matchup.first)),
            "2" => return Ok(Some(matchup.second)),
            "q" => return Ok(None),
            _ => println!("Please answer 1, 2 or q."),
        }
    }
}

fn print_rankings(
    rankings: &[PlayerRanking],
    players: &HashMap<TournamentPlayerId, TournamentPlayer>,
) {
    println!("\n{}", "=== Rankings ===".bold());
    println!(
        "{:<5} {:<24} {:>5} {:>8} {:>11}",
        "Rank", "Player", "Skill", "Rating", "Confidence"
    );

    for ranking in rankings {
        println!(
            "{:<5} {:<24} {:>5} {:>8.1} {:>11}",
            ranking.rank,
            display_name(players, ranking.player_id),
            ranking.score,
            ranking.rating,
            format_confidence(ranking.confidence)
        );
    }
    println!();
}

fn format_confidence(confidence: f64) -> String {
    let text = format!("{:.0}%", confidence * 100.0);
    if confidence < 0.6 {
        text.yellow().to_string()
    } else {
        text
    }
}

fn display_name(
    players: &HashMap<TournamentPlayerId, TournamentPlayer>,
    id: TournamentPlayerId,
) -> String {
    players
        .get(&id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("Player {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Player, Position};
    use crate::tournament::Phase;
    use std::io::Cursor;

    fn roster(n: i64) -> Vec<Player> {
        (1..=n)
            .map(|id| Player {
                id,
                name: format!("Player {id}"),
                skill: 5,
                position: Position::Forward,
            })
            .collect()
    }

    #[test]
    fn scripted_answers_drive_the_session_to_results() {
        let mut session = TournamentSession::new(&roster(4));
        session.start();
        let total = session.pending_count();

        let script = "1\n".repeat(total);
        run_comparisons(&mut session, &mut Cursor::new(script)).unwrap();

        assert_eq!(session.phase(), Phase::Results);
        assert_eq!(session.resolved_count(), total);
    }

    #[test]
    fn quitting_early_keeps_partial_results() {
        let mut session = TournamentSession::new(&roster(4));
        session.start();

        let script = "2\n2\nq\n";
        run_comparisons(&mut session, &mut Cursor::new(script)).unwrap();

        assert_eq!(session.resolved_count(), 2);
        assert_eq!(session.rankings().len(), 4);
    }

    #[test]
    fn garbage_answers_are_re_asked() {
        let mut session = TournamentSession::new(&roster(2));
        session.start();
        let total = session.pending_count();

        let script = format!("maybe\n3\n{}", "1\n".repeat(total));
        run_comparisons(&mut session, &mut Cursor::new(script)).unwrap();

        assert_eq!(session.resolved_count(), total);
    }

    #[test]
    fn end_of_input_stops_the_run() {
        let mut session = TournamentSession::new(&roster(3));
        session.start();

        run_comparisons(&mut session, &mut Cursor::new("1\n")).unwrap();

        assert_eq!(session.resolved_count(), 1);
    }
}
