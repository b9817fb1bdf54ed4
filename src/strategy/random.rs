use super::*;
use rand::rngs::SmallRng;

/// Uniform draw every round; ignores history.
pub struct Random {
    rng: SmallRng,
    ledger: Ledger,
    history: History,
}

impl Random {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            ledger: Ledger::default(),
            history: History::default(),
        }
    }
}

impl Strategy for Random {
    fn name(&self) -> &'static str {
        "random"
    }
    fn next_move(&mut self) -> Move {
        let mine = Move::random(&mut self.rng);
        self.ledger.commit(mine);
        mine
    }
    fn record_opponent_move(&mut self, m: Move) {
        self.ledger.settle(m);
        self.history.push(m);
    }
    fn explain(&self) -> String {
        String::from("Random choice - no learning")
    }
    fn stats(&self) -> Stats {
        Stats::new(self.ledger.record(), 0, self.history.moves())
    }
    fn reset(&mut self) {
        self.ledger.clear();
        self.history.clear();
    }
}
