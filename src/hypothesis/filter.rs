use crate::*;

/// Evidence floor, entropy ceiling, and optional tolerance pruning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    min_observations: u32,
    threshold: Entropy,
    pruning: bool,
}

impl Filter {
    /// Enough observations to be scored at all.
    pub fn evidenced(&self, tally: &Tally) -> bool {
        tally.total() >= self.min_observations
    }
    /// Low enough uncertainty to be trusted.
    pub fn trusted(&self, hypothesis: &Hypothesis) -> bool {
        hypothesis.entropy <= self.threshold
    }
    /// Drops untrusted hypotheses, then, if pruning, those more than
    /// [`PRUNING_TOLERANCE`] bits worse than the best survivor.
    pub fn apply(&self, hypotheses: Vec<Hypothesis>) -> Vec<Hypothesis> {
        let trusted = hypotheses
            .into_iter()
            .filter(|h| self.trusted(h))
            .collect::<Vec<_>>();
        self.prune(trusted)
    }
    fn prune(&self, hypotheses: Vec<Hypothesis>) -> Vec<Hypothesis> {
        if !self.pruning || hypotheses.len() <= 1 {
            return hypotheses;
        }
        let best = hypotheses
            .iter()
            .map(|h| h.entropy)
            .fold(Entropy::INFINITY, Entropy::min);
        hypotheses
            .into_iter()
            .filter(|h| h.entropy <= best + PRUNING_TOLERANCE)
            .collect()
    }
}

impl From<&Config> for Filter {
    fn from(config: &Config) -> Self {
        Self {
            min_observations: config.min_observations,
            threshold: config.entropy_threshold,
            pruning: config.hypothesis_pruning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hypothesis(counts: [u32; 3]) -> Hypothesis {
        Hypothesis::score(Context::from(vec![Move::Rock]), Tally::from(counts)).unwrap()
    }

    fn filter(pruning: bool) -> Filter {
        Filter::from(&Config {
            entropy_threshold: 1.5,
            min_observations: 3,
            hypothesis_pruning: pruning,
            ..Config::default()
        })
    }

    #[test]
    fn evidence_floor() {
        assert!(!filter(true).evidenced(&Tally::from([1, 1, 0])));
        assert!(filter(true).evidenced(&Tally::from([1, 1, 1])));
    }

    #[test]
    fn threshold_drops_uniform() {
        let kept = filter(false).apply(vec![hypothesis([4, 4, 4]), hypothesis([9, 0, 0])]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].entropy, 0.);
    }

    #[test]
    fn pruning_keeps_near_best() {
        // 0.0, ~0.72, ~1.0 bits
        let candidates = vec![hypothesis([9, 0, 0]), hypothesis([8, 2, 0]), hypothesis([5, 5, 0])];
        assert_eq!(filter(false).apply(candidates.clone()).len(), 3);
        assert_eq!(filter(true).apply(candidates).len(), 1);
    }

    #[test]
    fn pruning_never_empties() {
        let candidates = vec![hypothesis([5, 5, 0]), hypothesis([6, 4, 0])];
        assert_eq!(filter(true).apply(candidates).len(), 2);
    }
}
