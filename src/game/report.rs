//! End-of-game winner determination.

use serde::{Deserialize, Serialize};

use crate::core::Participant;

/// Outcome of a completed game.
///
/// Every participant holding the maximum score is a winner; more than one
/// makes the game a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameReport {
    /// Single winner by name and score.
    Winner { name: String, points: i32 },
    /// Two or more participants tied at the maximum score.
    Draw { names: Vec<String>, points: i32 },
}

impl GameReport {
    /// Compute the report from a non-empty participant list.
    ///
    /// The controller guarantees non-emptiness at configuration time; this
    /// only debug-asserts it.
    #[must_use]
    pub fn from_participants(participants: &[Participant]) -> Self {
        debug_assert!(!participants.is_empty(), "no participants to rank");

        let max_points = participants
            .iter()
            .map(Participant::points)
            .max()
            .unwrap_or(0);

        let mut names: Vec<String> = participants
            .iter()
            .filter(|p| p.points() == max_points)
            .map(|p| p.name().to_string())
            .collect();

        if names.len() == 1 {
            GameReport::Winner {
                name: names.remove(0),
                points: max_points,
            }
        } else {
            GameReport::Draw {
                names,
                points: max_points,
            }
        }
    }

    /// Check if the named participant is among the winners.
    #[must_use]
    pub fn is_winner(&self, name: &str) -> bool {
        match self {
            GameReport::Winner { name: n, .. } => n == name,
            GameReport::Draw { names, .. } => names.iter().any(|n| n == name),
        }
    }

    /// The shared maximum score.
    #[must_use]
    pub fn points(&self) -> i32 {
        match self {
            GameReport::Winner { points, .. } | GameReport::Draw { points, .. } => *points,
        }
    }
}

impl std::fmt::Display for GameReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameReport::Winner { name, points } => {
                write!(f, "Game ended! The winner is {name} with {points} points!")
            }
            GameReport::Draw { names, points } => {
                write!(
                    f,
                    "Game ended! It's a draw between: {} with {points} points each!",
                    names.join(", ")
                )
            }
        }
    }
}
