use crate::*;
use rand::Rng;
use rand::rngs::SmallRng;
use std::collections::HashMap;

/// The RELPH engine.
///
/// Hypotheses for the live window are created when a move is decided and
/// credited when that round's outcome arrives. A hypothesis matches when
/// its context is a suffix of the window, so at most `stm_length` of them
/// vote or learn on any turn.
pub struct Relph {
    config: Config,
    rng: SmallRng,
    history: History,
    records: HashMap<Context, HypothesisRecord>,
    ledger: Ledger,
    trials: Vec<Trial>,
    choice: Choice,
}

impl Relph {
    pub fn new(config: Config, rng: SmallRng) -> anyhow::Result<Self> {
        let config = config.validate()?;
        log::info!("relph {}", config);
        Ok(Self {
            history: History::from(&config),
            records: HashMap::new(),
            ledger: Ledger::default(),
            trials: Vec::new(),
            choice: Choice::Idle,
            config,
            rng,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn choice(&self) -> &Choice {
        &self.choice
    }
    pub fn hypotheses(&self) -> impl Iterator<Item = &HypothesisRecord> {
        self.records.values()
    }
    pub fn value(&self, context: &Context) -> Option<Utility> {
        self.records.get(context).map(|r| r.value)
    }
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }
    /// Mean live-hypothesis count over all trials so far.
    pub fn average_hypotheses(&self) -> Probability {
        match self.trials.len() {
            0 => 0.,
            n => {
                self.trials.iter().map(|t| t.hypotheses).sum::<usize>() as Probability
                    / n as Probability
            }
        }
    }

    /// Books a completed round: credit every hypothesis that matched the
    /// window the move was chosen from, extend the history, then delete
    /// hypotheses whose smoothed entropy exceeds the threshold.
    pub fn update(&mut self, mine: Move, theirs: Move, outcome: Outcome) {
        if outcome != resolve(mine, theirs) {
            log::warn!(
                "{} vs {} reported as {}, resolves to {}",
                mine,
                theirs,
                outcome,
                resolve(mine, theirs)
            );
        }
        let reward = outcome.reward();
        let alpha = self.config.alpha;
        let window = self.history.window(self.config.stm_length);
        let mut credited = 0;
        for context in Self::suffixes(window) {
            if let Some(record) = self.records.get_mut(&context) {
                record.credit(mine, reward, alpha);
                credited += 1;
            }
        }
        self.history.push(theirs);
        let before = self.records.len();
        let threshold = self.config.entropy_threshold;
        self.records.retain(|_, r| r.entropy() <= threshold);
        log::debug!(
            "credited {} hypotheses with {:+}, pruned {} of {}",
            credited,
            reward,
            before - self.records.len(),
            before
        );
        self.ledger.score(outcome);
        self.trials.push(Trial {
            trial: self.trials.len() + 1,
            mine,
            theirs,
            outcome,
            reward,
            hypotheses: self.records.len(),
        });
    }

    /// Resets, then plays a whole opponent sequence round by round.
    pub fn simulate(&mut self, opponent: &[Move]) -> Vec<Trial> {
        self.reset();
        for theirs in opponent.iter().copied() {
            let mine = self.next_move();
            self.update(mine, theirs, resolve(mine, theirs));
        }
        self.trials.clone()
    }

    /// Tail contexts of `window`, shortest first.
    fn suffixes(window: &[Move]) -> impl Iterator<Item = Context> + '_ {
        (1..=window.len()).map(move |n| Context::from(&window[window.len() - n..]))
    }

    /// Registers any unseen subset of the window with a small random value.
    fn generate(&mut self) {
        let window = self.history.window(self.config.stm_length);
        for context in Context::subsets(window) {
            if !self.records.contains_key(&context) {
                let value = self.rng.random::<Utility>() * INITIAL_VALUE_SCALE;
                log::trace!("new hypothesis {} at {:.3}", context, value);
                self.records
                    .insert(context.clone(), HypothesisRecord::new(context, value));
            }
        }
    }

    /// Q(a) summed over hypotheses matching the live window.
    fn q(&self) -> ([Utility; 3], usize) {
        let window = self.history.window(self.config.stm_length);
        let matching = Self::suffixes(window)
            .filter_map(|context| self.records.get(&context))
            .collect::<Vec<_>>();
        let q = Move::ALL.map(|a| matching.iter().map(|r| r.vote(a)).sum::<Utility>());
        (q, matching.len())
    }

    fn choose(&mut self) -> anyhow::Result<Choice> {
        self.generate();
        let (q, matching) = self.q();
        let softmax = Softmax::new(&q, SOFTMAX_TEMPERATURE);
        let chosen = Move::from(softmax.sample(&mut self.rng)?);
        let policy = Move::ALL.map(|m| softmax.density(&m.index()));
        log::debug!("q {:?} over {} matching, chose {}", q, matching, chosen);
        Ok(Choice::Weighted {
            q,
            policy,
            matching,
            chosen,
        })
    }
}

impl Strategy for Relph {
    fn name(&self) -> &'static str {
        "relph"
    }
    fn next_move(&mut self) -> Move {
        self.choice = if self.history.is_empty() {
            Choice::Unfounded
        } else {
            self.choose().unwrap_or_else(|e| {
                log::warn!("selection failed, playing randomly: {:#}", e);
                Choice::Fault(e.to_string())
            })
        };
        let mine = match self.choice {
            Choice::Weighted { chosen, .. } => chosen,
            _ => Move::random(&mut self.rng),
        };
        self.ledger.commit(mine);
        mine
    }
    fn record_opponent_move(&mut self, m: Move) {
        match self.ledger.pending() {
            Some(mine) => self.update(mine, m, resolve(mine, m)),
            None => {
                log::debug!("{} arrived with no move committed", m);
                self.history.push(m);
            }
        }
    }
    fn explain(&self) -> String {
        format!("{} ({} live hypotheses)", self.choice, self.records.len())
    }
    fn stats(&self) -> Stats {
        Stats::new(self.ledger.record(), self.records.len(), self.history.moves())
    }
    fn reset(&mut self) {
        self.history.clear();
        self.records.clear();
        self.ledger.clear();
        self.trials.clear();
        self.choice = Choice::Idle;
    }
}
