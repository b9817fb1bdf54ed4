use crate::*;

/// One completed RELPH round as the engine saw it.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trial {
    pub trial: usize,
    pub mine: Move,
    pub theirs: Move,
    pub outcome: Outcome,
    pub reward: Utility,
    /// Live hypotheses after this round's pruning.
    pub hypotheses: usize,
}

impl std::fmt::Display for Trial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:<5} {:<8} vs {:<8} {:<4} {:+.0} ({} hypotheses)",
            self.trial,
            self.mine.to_string(),
            self.theirs.to_string(),
            self.outcome.to_string(),
            self.reward,
            self.hypotheses
        )
    }
}
