use super::*;
use rand::rngs::SmallRng;

/// Plays whatever beats the opponent's previous move.
pub struct CounterLast {
    rng: SmallRng,
    ledger: Ledger,
    history: History,
}

impl CounterLast {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            ledger: Ledger::default(),
            history: History::default(),
        }
    }
}

impl Strategy for CounterLast {
    fn name(&self) -> &'static str {
        "counter"
    }
    fn next_move(&mut self) -> Move {
        let mine = match self.history.last() {
            Some(last) => last.counter(),
            None => Move::random(&mut self.rng),
        };
        self.ledger.commit(mine);
        mine
    }
    fn record_opponent_move(&mut self, m: Move) {
        self.ledger.settle(m);
        self.history.push(m);
    }
    fn explain(&self) -> String {
        match self.history.last() {
            Some(last) => format!("You last played {}, so I'll play {}", last, last.counter()),
            None => String::from("No moves yet - playing randomly"),
        }
    }
    fn stats(&self) -> Stats {
        Stats::new(self.ledger.record(), 0, self.history.moves())
    }
    fn reset(&mut self) {
        self.ledger.clear();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn counters_previous_move() {
        let mut counter = CounterLast::new(SmallRng::seed_from_u64(0));
        counter.next_move();
        for m in [Move::Rock, Move::Scissors, Move::Paper, Move::Paper] {
            counter.record_opponent_move(m);
            assert_eq!(counter.next_move(), m.counter());
        }
    }

    #[test]
    fn beats_a_repeater() {
        let mut counter = CounterLast::new(SmallRng::seed_from_u64(0));
        for _ in 0..20 {
            counter.next_move();
            counter.record_opponent_move(Move::Scissors);
        }
        let stats = counter.stats();
        assert_eq!(stats.rounds, 20);
        assert!(stats.wins >= 19);
        assert_eq!(stats.recent.len(), RECENT_MOVES);
    }

    #[test]
    fn reset_forgets() {
        let mut counter = CounterLast::new(SmallRng::seed_from_u64(0));
        counter.next_move();
        counter.record_opponent_move(Move::Rock);
        counter.reset();
        assert_eq!(counter.stats().rounds, 0);
        assert!(counter.explain().contains("randomly"));
    }
}
