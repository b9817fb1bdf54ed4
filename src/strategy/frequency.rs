use super::*;
use rand::rngs::SmallRng;

/// Plays whatever beats the opponent's most frequent move so far.
///
/// Also the fallback ELPH reaches for when no pattern is reliable.
pub struct FrequencyCounter {
    rng: SmallRng,
    tally: Tally,
    ledger: Ledger,
    history: History,
}

impl FrequencyCounter {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            tally: Tally::default(),
            ledger: Ledger::default(),
            history: History::default(),
        }
    }
    /// The move beating the opponent's most frequent move, or a uniform
    /// draw before anything has been observed. Leaves stats untouched.
    pub fn choose(&mut self) -> Move {
        match self.tally.mode() {
            Some(frequent) => frequent.counter(),
            None => Move::random(&mut self.rng),
        }
    }
    /// Counts an opponent move without scoring a round.
    pub fn observe(&mut self, m: Move) {
        self.tally.observe(m);
        self.history.push(m);
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    /// (move, count, share of all observed moves) in priority order.
    pub fn frequencies(&self) -> Vec<(Move, u32, Probability)> {
        Move::ALL
            .into_iter()
            .map(|m| (m, self.tally.count(m), self.tally.density(&m)))
            .collect()
    }
    pub fn clear(&mut self) {
        self.tally = Tally::default();
        self.ledger.clear();
        self.history.clear();
    }
}

impl Strategy for FrequencyCounter {
    fn name(&self) -> &'static str {
        "frequency"
    }
    fn next_move(&mut self) -> Move {
        let mine = self.choose();
        self.ledger.commit(mine);
        mine
    }
    fn record_opponent_move(&mut self, m: Move) {
        self.ledger.settle(m);
        self.observe(m);
    }
    fn explain(&self) -> String {
        match self.tally.mode() {
            Some(frequent) => format!(
                "You play {} most often ({}/{}), so I'll counter it with {}",
                frequent,
                self.tally.count(frequent),
                self.tally.total(),
                frequent.counter()
            ),
            None => String::from("No moves yet - playing randomly"),
        }
    }
    fn stats(&self) -> Stats {
        Stats::new(self.ledger.record(), 0, self.history.moves())
    }
    fn reset(&mut self) {
        self.clear();
    }
}
