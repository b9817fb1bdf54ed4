use crate::*;

/// Observation counts per move.
///
/// Serves as the outcome distribution behind a context (what the opponent
/// played next), the opponent's overall move frequencies, and the per-action
/// visit counts of a RELPH hypothesis. Counts only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Tally([u32; 3]);

impl Tally {
    pub fn observe(&mut self, m: Move) {
        self.0[m.index()] += 1;
    }
    pub fn count(&self, m: Move) -> u32 {
        self.0[m.index()]
    }
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
    /// Most observed move. Equal counts resolve in [`Move::ALL`] order.
    pub fn mode(&self) -> Option<Move> {
        Move::ALL
            .into_iter()
            .filter(|m| self.count(*m) > 0)
            .fold(None, |best: Option<Move>, m| match best {
                Some(b) if self.count(b) >= self.count(m) => Some(b),
                _ => Some(m),
            })
    }
    /// Laplace-smoothed entropy H' = -Σ (c/(N+1))·log2(c/(N+1)).
    ///
    /// The extra pseudo-observation in the denominator keeps thin evidence
    /// from looking certain: a single observation scores 0.5 bits, not 0.
    pub fn smoothed_entropy(&self) -> Entropy {
        let n = self.total() as Entropy + 1.;
        self.0
            .iter()
            .filter(|c| **c > 0)
            .map(|c| *c as Entropy / n)
            .map(|p| -p * p.log2())
            .sum::<Entropy>()
            .max(0.)
    }
}

impl Density for Tally {
    type Support = Move;
    fn density(&self, x: &Self::Support) -> Probability {
        match self.total() {
            0 => 0.,
            n => self.count(*x) as Probability / n as Probability,
        }
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        Move::ALL.into_iter().filter(|m| self.count(*m) > 0)
    }
}

impl FromIterator<Move> for Tally {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut tally = Self::default();
        iter.into_iter().for_each(|m| tally.observe(m));
        tally
    }
}

impl From<[u32; 3]> for Tally {
    fn from(counts: [u32; 3]) -> Self {
        Self(counts)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "R {} · P {} · S {}",
            self.count(Move::Rock),
            self.count(Move::Paper),
            self.count(Move::Scissors)
        )
    }
}
