use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashSet;

/// The ELPH engine.
///
/// The pattern store maps every contiguous context of up to `stm_length`
/// moves to the outcomes that followed it. It only grows; unreliable
/// contexts are filtered when a decision is made, never deleted.
pub struct Elph {
    config: Config,
    filter: Filter,
    rng: SmallRng,
    history: History,
    store: PatternStore,
    fallback: FrequencyCounter,
    ledger: Ledger,
    decision: Decision,
}

impl Elph {
    pub fn new(config: Config, mut rng: SmallRng) -> anyhow::Result<Self> {
        let config = config.validate()?;
        log::info!("elph {}", config);
        Ok(Self {
            filter: Filter::from(&config),
            history: History::from(&config),
            store: PatternStore::default(),
            fallback: FrequencyCounter::new(SmallRng::from_rng(&mut rng)),
            ledger: Ledger::default(),
            decision: Decision::ColdStart {
                seen: 0,
                needed: config.stm_length,
            },
            config,
            rng,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn decision(&self) -> &Decision {
        &self.decision
    }

    /// The opponent move the engine expects next, or `None` when it would
    /// fall back to frequency countering. Samples like a real decision but
    /// commits nothing.
    pub fn predict(&mut self) -> Option<Move> {
        self.decide().prediction()
    }

    /// Every context with enough evidence to be scored, lowest entropy first.
    pub fn report(&self) -> Vec<Pattern> {
        let scored = self
            .store
            .iter()
            .filter(|(_, tally)| self.filter.evidenced(tally))
            .filter_map(|(context, tally)| {
                Hypothesis::score(context.clone(), *tally)
                    .inspect_err(|e| log::warn!("skipping {} in report: {}", context, e))
                    .ok()
            })
            .collect::<Vec<_>>();
        let reliable = self
            .filter
            .apply(scored.clone())
            .into_iter()
            .map(|h| h.context)
            .collect::<HashSet<_>>();
        let mut rows = scored
            .into_iter()
            .map(|h| Pattern {
                reliable: reliable.contains(&h.context),
                context: h.context,
                tally: h.tally,
                entropy: h.entropy,
            })
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| {
            a.entropy
                .total_cmp(&b.entropy)
                .then_with(|| a.context.cmp(&b.context))
        });
        rows
    }

    fn decide(&mut self) -> Decision {
        let needed = self.config.stm_length;
        let seen = self.history.len();
        if seen < needed {
            log::debug!("cold start ({}/{})", seen, needed);
            return Decision::ColdStart { seen, needed };
        }
        match self.select() {
            Ok(decision) => decision,
            Err(e) => {
                log::warn!("scoring failed, falling back: {:#}", e);
                Decision::Fault(e.to_string())
            }
        }
    }

    /// Scores the live window's contexts, filters them, and samples one.
    fn select(&mut self) -> anyhow::Result<Decision> {
        let candidates = self.candidates()?;
        let count = candidates.len();
        let survivors = self.filter.apply(candidates);
        log::debug!("{} of {} candidates survive", survivors.len(), count);
        if survivors.is_empty() {
            return Ok(Decision::NoReliable { candidates: count });
        }
        let entropies = survivors.iter().map(|h| h.entropy).collect::<Vec<_>>();
        let index = Softmax::entropies(&entropies).sample(&mut self.rng)?;
        let total = survivors.len();
        let hypothesis = survivors
            .into_iter()
            .nth(index)
            .ok_or_else(|| anyhow::anyhow!("sampled {} of {} survivors", index, total))?;
        let prediction = hypothesis
            .prediction()
            .ok_or_else(|| anyhow::anyhow!("hypothesis {} has no observations", hypothesis))?;
        log::debug!("selected {} predicting {}", hypothesis, prediction);
        Ok(Decision::Pattern {
            hypothesis,
            prediction,
            survivors: total,
        })
    }

    /// Contiguous contexts of the window that have enough evidence, scored.
    fn candidates(&self) -> anyhow::Result<Vec<Hypothesis>> {
        Context::windows(self.history.window(self.config.stm_length))
            .into_iter()
            .filter_map(|context| self.store.get(&context).copied().map(|t| (context, t)))
            .filter(|(_, tally)| self.filter.evidenced(tally))
            .map(|(context, tally)| Hypothesis::score(context, tally))
            .inspect(|h| {
                if let Ok(h) = h {
                    log::trace!("candidate {}", h)
                }
            })
            .collect()
    }
}

impl Strategy for Elph {
    fn name(&self) -> &'static str {
        "elph"
    }
    fn next_move(&mut self) -> Move {
        self.decision = self.decide();
        let mine = match self.decision.prediction() {
            Some(prediction) => prediction.counter(),
            None => self.fallback.choose(),
        };
        self.ledger.commit(mine);
        mine
    }
    fn record_opponent_move(&mut self, m: Move) {
        self.ledger.settle(m);
        self.store
            .observe(self.history.moves(), self.config.stm_length, m);
        self.fallback.observe(m);
        self.history.push(m);
    }
    fn explain(&self) -> String {
        match self.decision {
            Decision::Pattern { .. } => self.decision.to_string(),
            _ => format!("{}. {}", self.decision, self.fallback.explain()),
        }
    }
    fn stats(&self) -> Stats {
        Stats::new(self.ledger.record(), self.store.len(), self.history.moves())
    }
    fn reset(&mut self) {
        self.history.clear();
        self.store.clear();
        self.fallback.clear();
        self.ledger.clear();
        self.decision = Decision::ColdStart {
            seen: 0,
            needed: self.config.stm_length,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elph(config: Config) -> Elph {
        Elph::new(config, SmallRng::seed_from_u64(42)).unwrap()
    }

    fn feed(engine: &mut Elph, moves: impl IntoIterator<Item = Move>) {
        moves
            .into_iter()
            .for_each(|m| engine.record_opponent_move(m));
    }

    fn cycle(n: usize) -> impl Iterator<Item = Move> {
        [Move::Rock, Move::Paper, Move::Scissors]
            .into_iter()
            .cycle()
            .take(3 * n)
    }

    #[test]
    fn rejects_invalid_config() {
        let config = Config {
            alpha: 1.5,
            ..Config::elph()
        };
        assert!(Elph::new(config, SmallRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn cold_start_uses_frequency() {
        let mut engine = elph(Config::elph());
        feed(&mut engine, [Move::Rock, Move::Rock]);
        let mine = engine.next_move();
        assert!(Move::ALL.contains(&mine));
        assert!(engine.decision().is_fallback());
        assert!(engine.explain().contains("frequency"));
        assert_eq!(engine.predict(), None);
    }

    #[test]
    fn repeating_cycle_report() {
        let mut engine = elph(Config {
            stm_length: 3,
            entropy_threshold: 1.5,
            min_observations: 3,
            hypothesis_pruning: true,
            ..Config::elph()
        });
        feed(&mut engine, cycle(10));
        let report = engine.report();
        let rock_paper = report
            .iter()
            .find(|p| p.context.to_string() == "Rock-Paper")
            .expect("Rock-Paper is tracked");
        assert_eq!(rock_paper.tally.count(Move::Scissors), 10);
        assert!(rock_paper.entropy.abs() < 0.001);
        assert!(rock_paper.reliable);
        assert!(Move::ALL.contains(&engine.next_move()));
        assert!(!engine.decision().is_fallback());
    }

    #[test]
    fn report_is_sorted_by_entropy() {
        let mut engine = elph(Config::elph());
        let ref mut rng = SmallRng::seed_from_u64(7);
        feed(&mut engine, (0..300).map(|_| Move::random(rng)));
        let report = engine.report();
        assert!(!report.is_empty());
        assert!(report.windows(2).all(|w| w[0].entropy <= w[1].entropy));
        assert!(report.iter().all(|p| p.tally.total() >= 3));
        assert!(report.iter().all(|p| p.entropy.is_finite()));
    }

    #[test]
    fn monotone_history_is_stable() {
        let mut engine = elph(Config::elph());
        feed(&mut engine, std::iter::repeat_n(Move::Rock, 50));
        assert!(engine.report().iter().any(|p| p.entropy.abs() < 0.001));
        for _ in 0..20 {
            assert_eq!(engine.next_move(), Move::Paper);
            engine.record_opponent_move(Move::Rock);
        }
        assert_eq!(engine.predict(), Some(Move::Rock));
        assert!(engine.explain().contains("Rock"));
    }

    #[test]
    fn pruning_never_adds_reliable() {
        let moves = {
            let ref mut rng = SmallRng::seed_from_u64(11);
            (0..400)
                .map(|i| match i % 4 {
                    0 => Move::Rock,
                    _ => Move::random(rng),
                })
                .collect::<Vec<_>>()
        };
        let reliable = |pruning: bool| {
            let mut engine = elph(Config {
                entropy_threshold: 1.5,
                hypothesis_pruning: pruning,
                ..Config::elph()
            });
            feed(&mut engine, moves.iter().copied());
            engine.report().iter().filter(|p| p.reliable).count()
        };
        assert!(reliable(true) <= reliable(false));
    }

    #[test]
    fn no_reliable_pattern_falls_back() {
        let mut engine = elph(Config {
            entropy_threshold: 0.1,
            ..Config::elph()
        });
        let ref mut rng = SmallRng::seed_from_u64(3);
        feed(&mut engine, (0..900).map(|_| Move::random(rng)));
        engine.next_move();
        assert!(matches!(engine.decision(), Decision::NoReliable { .. }));
        assert!(engine.explain().contains("frequency"));
    }

    #[test]
    fn fault_is_explained() {
        let mut engine = elph(Config::elph());
        engine.decision = Decision::Fault(String::from("non-finite entropy"));
        assert!(engine.explain().contains("non-finite entropy"));
        assert!(engine.explain().contains("frequency"));
    }

    #[test]
    fn stats_track_outcomes_and_patterns() {
        let mut engine = elph(Config::elph());
        for m in cycle(20) {
            engine.next_move();
            engine.record_opponent_move(m);
        }
        let stats = engine.stats();
        assert_eq!(stats.rounds, 60);
        assert_eq!(stats.wins + stats.losses + stats.ties, 60);
        assert!(stats.patterns > 0);
        assert_eq!(
            stats.recent,
            vec![Move::Paper, Move::Scissors, Move::Rock, Move::Paper, Move::Scissors]
        );
        assert!(stats.wins > stats.losses);
        engine.reset();
        assert_eq!(engine.stats(), Stats::default());
    }

    #[test]
    fn decision_within_budget() {
        let mut engine = elph(Config {
            stm_length: BUDGET_STM_LENGTH,
            min_observations: 1,
            ..Config::elph()
        });
        let ref mut rng = SmallRng::seed_from_u64(5);
        feed(&mut engine, (0..HISTORY_CAP).map(|_| Move::random(rng)));
        let start = std::time::Instant::now();
        engine.next_move();
        assert!(start.elapsed() < DECISION_BUDGET);
    }
}
