use serde::{Deserialize, Serialize};

use crate::player::Player;

/// Final hand total of one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub name: String,
    pub label: usize,
    pub score: i32,
}

/// Game-over payload: every seat's score and the winner, if there is exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub scores: Vec<PlayerScore>,
    /// Seat label of the sole lowest score; `None` when two or more seats share it
    pub winner: Option<usize>,
}

impl GameOutcome {
    /// Scores every hand and picks the lowest total. A shared minimum yields no winner.
    pub fn from_players(players: &[Player]) -> Self {
        let scores: Vec<PlayerScore> = players
            .iter()
            .map(|p| PlayerScore {
                name: p.name().to_string(),
                label: p.label(),
                score: p.hand().score(),
            })
            .collect();
        let winner = scores.iter().map(|s| s.score).min().and_then(|best| {
            let mut at_best = scores.iter().filter(|s| s.score == best);
            match (at_best.next(), at_best.next()) {
                (Some(only), None) => Some(only.label),
                _ => None,
            }
        });
        Self { scores, winner }
    }

    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }

    pub fn winner_name(&self) -> Option<&str> {
        let label = self.winner?;
        self.scores
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.name.as_str())
    }

    pub fn score_of(&self, label: usize) -> Option<i32> {
        self.scores.iter().find(|s| s.label == label).map(|s| s.score)
    }

    /// Lines for the game-over screen.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .scores
            .iter()
            .map(|s| format!("{}'s score: {}", s.name, s.score))
            .collect();
        match self.winner_name() {
            Some(name) => lines.push(format!("Winner: {}", name)),
            None => lines.push("No Winner. The war starts.".to_string()),
        }
        lines
    }
}
