use crate::*;

/// Running win/loss/tie counts from one party's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
}

impl Record {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn rounds(&self) -> usize {
        self.wins + self.losses + self.ties
    }
    pub fn win_rate(&self) -> Probability {
        match self.rounds() {
            0 => 0.,
            n => self.wins as Probability / n as Probability,
        }
    }
}

/// Pairs a committed move with the opponent's reply to keep a [`Record`].
///
/// Strategies commit their own move when they decide and settle once the
/// opponent's move is revealed. A reply with nothing committed is not scored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ledger {
    record: Record,
    pending: Option<Move>,
}

impl Ledger {
    pub fn commit(&mut self, mine: Move) {
        self.pending = Some(mine);
    }
    pub fn settle(&mut self, theirs: Move) -> Option<Outcome> {
        let outcome = self.pending.take().map(|mine| resolve(mine, theirs));
        outcome.inspect(|o| self.record.add(*o))
    }
    /// Score an outcome the caller already resolved.
    pub fn score(&mut self, outcome: Outcome) {
        self.pending = None;
        self.record.add(outcome);
    }
    pub fn pending(&self) -> Option<Move> {
        self.pending
    }
    pub fn record(&self) -> Record {
        self.record
    }
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
