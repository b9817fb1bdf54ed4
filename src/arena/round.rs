use crate::*;

/// One round of an arena session, from the first strategy's side.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    pub round: usize,
    pub mine: Move,
    pub theirs: Move,
    pub outcome: Outcome,
    /// Patterns the first strategy tracked after the round.
    pub patterns: usize,
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>5} {:<8} {:<8} {}",
            self.round,
            self.mine.to_string(),
            self.theirs.to_string(),
            self.outcome
        )
    }
}
