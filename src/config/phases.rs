use crate::*;

/// Move-count boundaries of the three-phase bias schedule.
///
/// Moves `1..=phase1_end` are phase 1, moves up to `phase2_end` are
/// phase 2, and everything after is phase 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Phases {
    pub phase1_end: usize,
    pub phase2_end: usize,
}

impl Phases {
    pub fn validate(self) -> anyhow::Result<Self> {
        anyhow::ensure!(
            self.phase1_end <= self.phase2_end,
            "phase 1 must end before phase 2 ({} > {})",
            self.phase1_end,
            self.phase2_end
        );
        Ok(self)
    }
    /// Phase number (1, 2 or 3) of the `n`th move, counting from 1.
    pub fn phase(&self, n: usize) -> usize {
        if n <= self.phase1_end {
            1
        } else if n <= self.phase2_end {
            2
        } else {
            3
        }
    }
    /// Move weights over (Rock, Paper, Scissors) for the `n`th move.
    pub fn bias(&self, n: usize) -> [Probability; 3] {
        match self.phase(n) {
            1 => PHASE_1_BIAS,
            2 => PHASE_2_BIAS,
            _ => PHASE_3_BIAS,
        }
    }
}

impl Default for Phases {
    fn default() -> Self {
        Self {
            phase1_end: PHASE_1_END,
            phase2_end: PHASE_2_END,
        }
    }
}
