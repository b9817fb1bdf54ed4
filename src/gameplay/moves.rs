use crate::*;
use rand::Rng;

/// One of the three cyclic choices.
///
/// Each move beats exactly one other and loses to exactly one other:
/// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
/// Declaration order doubles as the fixed priority used to break ties.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Move {
    /// Beats Scissors, loses to Paper.
    Rock,
    /// Beats Rock, loses to Scissors.
    Paper,
    /// Beats Paper, loses to Rock.
    Scissors,
}

impl Move {
    /// All moves in priority order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Dense index into per-move arrays.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// The move this one defeats.
    pub const fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// The move that defeats this one.
    pub const fn counter(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    /// Uniform draw over the three moves.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from(rng.random_range(0..Self::ALL.len()))
    }
}

impl From<usize> for Move {
    fn from(index: usize) -> Self {
        match index % 3 {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            other => Err(anyhow::anyhow!("unknown move {:?}", other)),
        }
    }
}

impl Support for Move {}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Paper => write!(f, "Paper"),
            Self::Scissors => write!(f, "Scissors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn counter_inverts_beats() {
        for m in Move::ALL {
            assert_eq!(m.counter().beats(), m);
            assert_eq!(m.beats().counter(), m);
            assert_ne!(m.counter(), m.beats());
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!(Move::try_from("Rock").unwrap(), Move::Rock);
        assert_eq!(Move::try_from(" p ").unwrap(), Move::Paper);
        assert_eq!(Move::try_from("SCISSORS").unwrap(), Move::Scissors);
        assert!(Move::try_from("lizard").is_err());
    }

    #[test]
    fn random_covers_all_moves() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[Move::random(rng).index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
