use serde::{Deserialize, Serialize};

/// A player's fixed on-ice role, used as a balancing dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Forward,
    Defense,
}

impl Position {
    pub fn as_str(&self) -> &str {
        match self {
            Position::Forward => "forward",
            Position::Defense => "defense",
        }
    }
}

/// Roster entry owned by the external roster store.
///
/// `skill` is expected to be in 1..=10 and is taken as-is; neither the
/// balancer nor the tournament engine validates or clamps it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub skill: i32,
    pub position: Position,
}

/// One side of a balanced split, carrying its caller-supplied label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub label: String,
    pub forwards: Vec<Player>,
    pub defensemen: Vec<Player>,
}

impl Team {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            forwards: Vec::new(),
            defensemen: Vec::new(),
        }
    }

    pub fn position_count(&self, position: Position) -> usize {
        match position {
            Position::Forward => self.forwards.len(),
            Position::Defense => self.defensemen.len(),
        }
    }

    pub fn total_players(&self) -> usize {
        self.forwards.len() + self.defensemen.len()
    }

    /// Mean skill over all assigned players, 0 for an empty team.
    pub fn average_skill(&self) -> f64 {
        let total = self.total_players();
        if total == 0 {
            return 0.0;
        }

        let sum: i32 = self
            .forwards
            .iter()
            .chain(self.defensemen.iter())
            .map(|p| p.skill)
            .sum();

        sum as f64 / total as f64
    }

    /// Append a player to the list matching its position.
    pub fn push(&mut self, player: Player) {
        match player.position {
            Position::Forward => self.forwards.push(player),
            Position::Defense => self.defensemen.push(player),
        }
    }
}

/// The two-team output of the balancer.
///
/// The two teams partition the input roster: every player lands in exactly
/// one team, in the list matching its position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSet {
    pub team_a: Team,
    pub team_b: Team,
}

impl TeamSet {
    pub fn new(label_a: impl Into<String>, label_b: impl Into<String>) -> Self {
        Self {
            team_a: Team::new(label_a),
            team_b: Team::new(label_b),
        }
    }

    pub fn total_players(&self) -> usize {
        self.team_a.total_players() + self.team_b.total_players()
    }
}
