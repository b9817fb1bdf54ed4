use super::*;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::SmallRng;

/// Non-adaptive three-phase schedule driven only by a move counter.
///
/// Phase 1 is uniform, phase 2 leans on Rock, phase 3 leans hard on Paper.
pub struct PhasedBias {
    rng: SmallRng,
    phases: Phases,
    moves: usize,
    ledger: Ledger,
    history: History,
}

impl PhasedBias {
    pub fn new(phases: Phases, rng: SmallRng) -> anyhow::Result<Self> {
        Ok(Self {
            rng,
            phases: phases.validate()?,
            moves: 0,
            ledger: Ledger::default(),
            history: History::default(),
        })
    }
    /// Current phase number and a short description of its distribution.
    pub fn phase(&self) -> (usize, &'static str) {
        match self.phases.phase(self.moves.max(1)) {
            1 => (1, "Random (33% each)"),
            2 => (2, "Light Bias (50% Rock)"),
            _ => (3, "Heavy Bias (80% Paper)"),
        }
    }
    fn draw(&mut self, weights: [Probability; 3]) -> Move {
        WeightedIndex::new(weights)
            .map(|index| Move::from(index.sample(&mut self.rng)))
            .unwrap_or_else(|_| Move::random(&mut self.rng))
    }
}

impl Strategy for PhasedBias {
    fn name(&self) -> &'static str {
        "phased"
    }
    fn next_move(&mut self) -> Move {
        self.moves += 1;
        let mine = self.draw(self.phases.bias(self.moves));
        self.ledger.commit(mine);
        mine
    }
    fn record_opponent_move(&mut self, m: Move) {
        self.ledger.settle(m);
        self.history.push(m);
    }
    fn explain(&self) -> String {
        match self.phase() {
            (1, _) => format!("Phase 1 (move {}): Playing randomly (33% each)", self.moves),
            (2, _) => format!(
                "Phase 2 (move {}): Favoring Rock (50% Rock, 25% each other)",
                self.moves
            ),
            _ => format!(
                "Phase 3 (move {}): Heavily favoring Paper (80% Paper, 10% each other)",
                self.moves
            ),
        }
    }
    fn stats(&self) -> Stats {
        Stats::new(self.ledger.record(), 0, self.history.moves())
    }
    fn reset(&mut self) {
        self.moves = 0;
        self.ledger.clear();
        self.history.clear();
    }
}
