use crate::*;

/// One row of the diagnostic pattern report.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pattern {
    pub context: Context,
    pub tally: Tally,
    pub entropy: Entropy,
    /// Would be a candidate for selection if this context were live.
    pub reliable: bool,
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<24} {:<20} {:>6.3} {}",
            self.context.to_string(),
            self.tally.to_string(),
            self.entropy,
            if self.reliable { "✓" } else { "·" }
        )
    }
}
