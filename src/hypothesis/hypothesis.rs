use crate::*;

/// A context scored against the outcomes that followed it.
///
/// A read-time projection of the pattern store; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Hypothesis {
    pub context: Context,
    pub tally: Tally,
    pub entropy: Entropy,
}

impl Hypothesis {
    /// Scores a context. Fails if the entropy is not a finite number
    /// of bits, which would poison selection weights downstream.
    pub fn score(context: Context, tally: Tally) -> anyhow::Result<Self> {
        let entropy = tally.entropy();
        anyhow::ensure!(
            entropy.is_finite(),
            "non-finite entropy {} for context {}",
            entropy,
            context
        );
        Ok(Self {
            context,
            tally,
            entropy,
        })
    }
    pub fn observations(&self) -> u32 {
        self.tally.total()
    }
    /// The opponent's most likely next move under this hypothesis.
    pub fn prediction(&self) -> Option<Move> {
        self.tally.mode()
    }
}

impl std::fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\" (entropy: {:.3}, {} observations)",
            self.context,
            self.entropy,
            self.observations()
        )
    }
}
