use crate::*;

/// Read-only snapshot of a strategy's session.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stats {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    pub rounds: usize,
    /// Contexts or hypotheses currently held. Zero for non-learning baselines.
    pub patterns: usize,
    /// Most recent opponent moves, oldest first.
    pub recent: Vec<Move>,
}

impl Stats {
    pub fn new(record: Record, patterns: usize, recent: &[Move]) -> Self {
        Self {
            wins: record.wins,
            losses: record.losses,
            ties: record.ties,
            rounds: record.rounds(),
            patterns,
            recent: recent[recent.len().saturating_sub(RECENT_MOVES)..].to_vec(),
        }
    }
    pub fn win_rate(&self) -> Probability {
        match self.rounds {
            0 => 0.,
            n => self.wins as Probability / n as Probability,
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "W {} / L {} / T {} ({:.1}% of {}), {} patterns",
            self.wins,
            self.losses,
            self.ties,
            self.win_rate() * 100.,
            self.rounds,
            self.patterns,
        )
    }
}
