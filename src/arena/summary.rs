use crate::*;

/// Aggregate view of a session from the first strategy's side.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    pub win_rate: Probability,
    pub loss_rate: Probability,
    pub tie_rate: Probability,
    /// Win rate over each third of the session; the last third absorbs
    /// the remainder and is the headline measure.
    pub thirds: [Probability; 3],
    /// Entropy of the first strategy's own choices, normalized to [0, 1].
    pub exploration: Entropy,
    /// Win rate per block of [`CURVE_BLOCK`] rounds.
    pub curve: Vec<Probability>,
    /// Patterns tracked at the end of the session.
    pub patterns: usize,
}

impl Summary {
    fn win_rate_over(rounds: &[Round]) -> Probability {
        let mut record = Record::default();
        rounds.iter().for_each(|r| record.add(r.outcome));
        record.win_rate()
    }
}

impl From<&[Round]> for Summary {
    fn from(rounds: &[Round]) -> Self {
        let mut record = Record::default();
        rounds.iter().for_each(|r| record.add(r.outcome));
        let n = record.rounds();
        let rate = |k: usize| match n {
            0 => 0.,
            n => k as Probability / n as Probability,
        };
        let third = n / 3;
        let thirds = [
            Self::win_rate_over(&rounds[..third]),
            Self::win_rate_over(&rounds[third..2 * third]),
            Self::win_rate_over(&rounds[2 * third..]),
        ];
        let choices = rounds.iter().map(|r| r.mine).collect::<Tally>();
        Self {
            rounds: n,
            wins: record.wins,
            losses: record.losses,
            ties: record.ties,
            win_rate: rate(record.wins),
            loss_rate: rate(record.losses),
            tie_rate: rate(record.ties),
            thirds,
            exploration: choices.entropy() / (Move::ALL.len() as Entropy).log2(),
            curve: rounds.chunks(CURVE_BLOCK).map(Self::win_rate_over).collect(),
            patterns: rounds.last().map(|r| r.patterns).unwrap_or(0),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌──────────────┬──────────┐")?;
        writeln!(f, "│ Rounds       │ {:>8} │", self.rounds)?;
        writeln!(f, "├──────────────┼──────────┤")?;
        writeln!(f, "│ Win          │ {:>7.1}% │", self.win_rate * 100.)?;
        writeln!(f, "│ Loss         │ {:>7.1}% │", self.loss_rate * 100.)?;
        writeln!(f, "│ Tie          │ {:>7.1}% │", self.tie_rate * 100.)?;
        writeln!(f, "├──────────────┼──────────┤")?;
        for (i, rate) in self.thirds.iter().enumerate() {
            writeln!(f, "│ Phase {}      │ {:>7.1}% │", i + 1, rate * 100.)?;
        }
        writeln!(f, "├──────────────┼──────────┤")?;
        writeln!(f, "│ Exploration  │ {:>8.3} │", self.exploration)?;
        writeln!(f, "│ Patterns     │ {:>8} │", self.patterns)?;
        writeln!(f, "└──────────────┴──────────┘")?;
        Ok(())
    }
}
