use crate::*;

/// Result of one round, from the first party's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    /// First party wins.
    Win,
    /// Second party wins.
    Loss,
    /// Same move.
    Tie,
}

/// Resolves a round. The single source of truth for the beats relation.
pub fn resolve(a: Move, b: Move) -> Outcome {
    if a == b {
        Outcome::Tie
    } else if a.beats() == b {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

impl Outcome {
    /// Reward signal: +1 win, 0 tie, -1 loss.
    pub const fn reward(self) -> Utility {
        match self {
            Self::Win => 1.,
            Self::Tie => 0.,
            Self::Loss => -1.,
        }
    }
    /// Same round seen from the other side.
    pub const fn flip(self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Tie => Self::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Tie => write!(f, "tie"),
        }
    }
}
