use crate::*;

/// A live RELPH hypothesis and everything it has learned.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HypothesisRecord {
    pub context: Context,
    /// Delta-rule estimate of the reward earned while this context matched.
    pub value: Utility,
    /// Cumulative reward per own action, indexed by [`Move::index`].
    pub rewards: [Utility; 3],
    /// Times each own action was taken while this context matched.
    pub counts: Tally,
}

impl HypothesisRecord {
    pub fn new(context: Context, value: Utility) -> Self {
        Self {
            context,
            value,
            rewards: [0.; 3],
            counts: Tally::default(),
        }
    }
    /// Mean reward of `action` under this hypothesis, if it was ever taken.
    pub fn average(&self, action: Move) -> Option<Utility> {
        match self.counts.count(action) {
            0 => None,
            n => Some(self.rewards[action.index()] / n as Utility),
        }
    }
    /// v ← (1-α)·v + α·r, and book the reward against the action taken.
    pub fn credit(&mut self, action: Move, reward: Utility, alpha: Probability) {
        self.value = (1. - alpha) * self.value + alpha * reward;
        self.rewards[action.index()] += reward;
        self.counts.observe(action);
    }
    /// Laplace-smoothed entropy of the action counts; the pruning criterion.
    pub fn entropy(&self) -> Entropy {
        self.counts.smoothed_entropy()
    }
    /// This hypothesis' vote for `action`. Only positively valued
    /// hypotheses vote, and only for actions they have tried.
    pub fn vote(&self, action: Move) -> Utility {
        self.value.max(0.) * self.average(action).unwrap_or(0.)
    }
}

impl std::fmt::Display for HypothesisRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\" (value: {:+.3}, H': {:.3}, {})",
            self.context,
            self.value,
            self.entropy(),
            self.counts
        )
    }
}
