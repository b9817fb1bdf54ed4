use crate::*;

/// Append-only record of one participant's moves over a session.
///
/// Growth is bounded: once the history exceeds `cap` moves it is
/// truncated to the most recent `keep`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    moves: Vec<Move>,
    cap: usize,
    keep: usize,
}

impl History {
    pub fn new(cap: usize, keep: usize) -> Self {
        debug_assert!(keep > 0 && keep < cap, "history keeps fewer moves than it caps");
        Self {
            moves: Vec::with_capacity(cap + 1),
            cap,
            keep,
        }
    }
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
        if self.moves.len() > self.cap {
            let excess = self.moves.len() - self.keep;
            self.moves.drain(..excess);
            log::debug!("truncated history to {} moves", self.keep);
        }
    }
    pub fn clear(&mut self) {
        self.moves.clear();
    }
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    /// The last `min(n, len)` moves, oldest first.
    pub fn window(&self, n: usize) -> &[Move] {
        &self.moves[self.moves.len().saturating_sub(n)..]
    }
    /// Per-move counts over everything still held.
    pub fn tally(&self) -> Tally {
        self.moves.iter().copied().collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_CAP, HISTORY_KEEP)
    }
}

impl From<&Config> for History {
    fn from(config: &Config) -> Self {
        Self::new(config.history_cap, config.history_keep)
    }
}
