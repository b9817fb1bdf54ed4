use crate::*;

/// How the most recent move was chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Less history than the short-term memory; frequency fallback.
    ColdStart { seen: usize, needed: usize },
    /// No candidate passed the evidence, entropy, and pruning filters.
    NoReliable { candidates: usize },
    /// Scoring failed; treated as insufficient evidence.
    Fault(String),
    /// A hypothesis was sampled and its mode countered.
    Pattern {
        hypothesis: Hypothesis,
        prediction: Move,
        survivors: usize,
    },
}

impl Decision {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Self::Pattern { .. })
    }
    pub fn prediction(&self) -> Option<Move> {
        match self {
            Self::Pattern { prediction, .. } => Some(*prediction),
            _ => None,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColdStart { seen, needed } => write!(
                f,
                "Not enough history yet ({}/{} moves), using frequency fallback",
                seen, needed
            ),
            Self::NoReliable { candidates } => write!(
                f,
                "No reliable pattern among {} candidates, using frequency fallback",
                candidates
            ),
            Self::Fault(reason) => write!(
                f,
                "Pattern scoring failed ({}), using frequency fallback",
                reason
            ),
            Self::Pattern {
                hypothesis,
                prediction,
                survivors,
            } => write!(
                f,
                "Pattern {} predicts {}, so I'll play {} (chosen from {} reliable)",
                hypothesis,
                prediction,
                prediction.counter(),
                survivors
            ),
        }
    }
}
